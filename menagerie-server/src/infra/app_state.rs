use std::{fmt, sync::Arc};

use menagerie_core::AnimalService;

use crate::infra::config::Config;

/// Shared handler state, built once at startup and never reassigned.
#[derive(Clone)]
pub struct AppState {
    animals: Arc<AnimalService>,
    config: Arc<Config>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(animals: Arc<AnimalService>, config: Arc<Config>) -> Self {
        Self { animals, config }
    }

    pub fn animals(&self) -> &AnimalService {
        &self.animals
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
