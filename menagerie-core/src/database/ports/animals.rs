use async_trait::async_trait;
use menagerie_model::{Animal, AnimalId};

use crate::error::Result;
use crate::policy::DuplicateIdPolicy;

/// Persistence boundary for animal records.
///
/// Every sequence-returning method yields records ordered by ascending id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnimalRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Animal>>;

    async fn get(&self, id: AnimalId) -> Result<Option<Animal>>;

    /// Case-insensitive exact match on `species`.
    async fn find_by_species(&self, species: &str) -> Result<Vec<Animal>>;

    /// Case-insensitive substring match on `name`.
    async fn find_by_name(&self, name: &str) -> Result<Vec<Animal>>;

    /// Store a new record keyed by its own `animal_id`. An existing key is
    /// handled according to `policy`.
    async fn insert(&self, animal: Animal, policy: DuplicateIdPolicy) -> Result<()>;

    /// Replace the record stored under `id`. Fails with `NotFound` when no
    /// such record exists.
    async fn replace(&self, id: AnimalId, animal: Animal) -> Result<()>;

    /// Fails with `NotFound` when no such record exists.
    async fn remove(&self, id: AnimalId) -> Result<()>;
}
