use menagerie_model::AnimalId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnimalError {
    #[error("Animal not found: {0}")]
    NotFound(AnimalId),

    #[error("Animal already exists: {0}")]
    Conflict(AnimalId),

    #[error("Database error: {0}")]
    Database(String),
}

pub type Result<T> = std::result::Result<T, AnimalError>;
