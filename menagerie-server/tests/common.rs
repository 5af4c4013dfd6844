use std::sync::Arc;

use anyhow::{Result, anyhow};
use axum_test::TestServer;
use menagerie_core::{Animal, AnimalRepository, DuplicateIdPolicy, InMemoryAnimalRepository};
use menagerie_server::{
    AppState, create_app,
    infra::{config::Config, startup::build_state},
};

// Code is used by test modules, but not in this scope
#[allow(unused)]
pub fn animal(id: i32, name: &str, species: &str) -> Animal {
    Animal::new(id, name, "Latin name", species, "habitat", "description")
}

#[allow(unused)]
pub fn sample_animals() -> Vec<Animal> {
    vec![
        animal(1, "Rex", "dog"),
        animal(2, "Tom", "cat"),
        animal(3, "Catbert", "dog"),
        animal(4, "Felix the Cat", "cat"),
        animal(5, "Nemo", "fish"),
    ]
}

#[allow(unused)]
pub fn build_state_with(
    repository: Arc<dyn AnimalRepository>,
    duplicate_ids: DuplicateIdPolicy,
) -> AppState {
    let mut config = Config::default();
    config.server.host = "127.0.0.1".into();
    config.server.port = 0;
    config.store.duplicate_ids = duplicate_ids;
    build_state(Arc::new(config), repository)
}

#[allow(unused)]
pub fn server_for(state: AppState) -> Result<TestServer> {
    TestServer::new(create_app(state)).map_err(|err| anyhow!(err.to_string()))
}

#[allow(unused)]
pub fn build_test_server(animals: Vec<Animal>, duplicate_ids: DuplicateIdPolicy) -> Result<TestServer> {
    let repository = Arc::new(InMemoryAnimalRepository::with_animals(animals));
    server_for(build_state_with(repository, duplicate_ids))
}
