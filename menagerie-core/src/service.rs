use std::{fmt, sync::Arc};

use menagerie_model::{Animal, AnimalId};
use tracing::{debug, info};

use crate::api::types::{AnimalQuery, DEFAULT_SPECIES};
use crate::database::ports::animals::AnimalRepository;
use crate::error::{AnimalError, Result};
use crate::policy::DuplicateIdPolicy;

/// Business operations over the animal catalogue.
///
/// Cheap to clone; all clones share the same repository.
#[derive(Clone)]
pub struct AnimalService {
    repository: Arc<dyn AnimalRepository>,
    duplicate_ids: DuplicateIdPolicy,
}

impl fmt::Debug for AnimalService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimalService")
            .field("duplicate_ids", &self.duplicate_ids)
            .finish_non_exhaustive()
    }
}

impl AnimalService {
    pub fn new(repository: Arc<dyn AnimalRepository>, duplicate_ids: DuplicateIdPolicy) -> Self {
        Self {
            repository,
            duplicate_ids,
        }
    }

    pub async fn get_all_animals(&self) -> Result<Vec<Animal>> {
        self.repository.list().await
    }

    pub async fn get_animal_by_id(&self, id: AnimalId) -> Result<Animal> {
        self.repository
            .get(id)
            .await?
            .ok_or(AnimalError::NotFound(id))
    }

    pub async fn get_animals_by_species(&self, species: &str) -> Result<Vec<Animal>> {
        debug!(species, "searching animals by species");
        self.repository.find_by_species(species).await
    }

    pub async fn get_animals_by_name(&self, name: &str) -> Result<Vec<Animal>> {
        debug!(name, "searching animals by name");
        self.repository.find_by_name(name).await
    }

    /// Resolve a combined filter from the collection root.
    pub async fn search(&self, query: &AnimalQuery) -> Result<Vec<Animal>> {
        match (query.species.as_deref(), query.name.as_deref()) {
            (Some(species), Some(name)) => {
                let mut animals = self.get_animals_by_species(species).await?;
                animals.retain(|animal| animal.name_contains(name));
                Ok(animals)
            }
            (Some(species), None) => self.get_animals_by_species(species).await,
            (None, Some(name)) => self.get_animals_by_name(name).await,
            (None, None) => self.get_animals_by_species(DEFAULT_SPECIES).await,
        }
    }

    pub async fn add_new_animal(&self, animal: Animal) -> Result<()> {
        let id = animal.animal_id;
        self.repository.insert(animal, self.duplicate_ids).await?;
        info!(animal_id = id, "animal created");
        Ok(())
    }

    /// Replace the record at `id`. The path id always wins over whatever id
    /// the payload carries.
    pub async fn update_animal(&self, id: AnimalId, animal: Animal) -> Result<()> {
        if animal.animal_id != id {
            debug!(
                path_id = id,
                payload_id = animal.animal_id,
                "payload id differs from path id; keeping path id"
            );
        }
        self.repository.replace(id, animal.with_id(id)).await?;
        info!(animal_id = id, "animal updated");
        Ok(())
    }

    pub async fn delete_animal_by_id(&self, id: AnimalId) -> Result<()> {
        self.repository.remove(id).await?;
        info!(animal_id = id, "animal deleted");
        Ok(())
    }
}
