use std::{fs, path::Path, sync::Arc};

use anyhow::Context;
use menagerie_core::{
    Animal, AnimalRepository, AnimalService, InMemoryAnimalRepository, PostgresAnimalRepository,
};
use tracing::info;

use crate::infra::{app_state::AppState, config::Config};

/// Read a JSON array of animals.
pub fn load_seed(path: &Path) -> anyhow::Result<Vec<Animal>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("invalid seed file {}", path.display()))
}

/// Open the configured store: PostgreSQL when a database URL is set (running
/// migrations first), otherwise an in-memory store with optional seed data.
pub async fn build_repository(config: &Config) -> anyhow::Result<Arc<dyn AnimalRepository>> {
    match &config.database.url {
        Some(url) => {
            let repository = PostgresAnimalRepository::connect(url)
                .await
                .context("failed to connect to PostgreSQL")?;
            repository
                .migrate()
                .await
                .context("database migration failed")?;
            info!("Connected to PostgreSQL and applied migrations");
            Ok(Arc::new(repository))
        }
        None => {
            let seed = match &config.seed.path {
                Some(path) => load_seed(path)?,
                None => Vec::new(),
            };
            info!(seeded = seed.len(), "Using in-memory animal store");
            Ok(Arc::new(InMemoryAnimalRepository::with_animals(seed)))
        }
    }
}

pub fn build_state(config: Arc<Config>, repository: Arc<dyn AnimalRepository>) -> AppState {
    let service = Arc::new(AnimalService::new(
        repository,
        config.store.duplicate_ids,
    ));
    AppState::new(service, config)
}
