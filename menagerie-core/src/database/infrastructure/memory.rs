use std::collections::BTreeMap;

use async_trait::async_trait;
use menagerie_model::{Animal, AnimalId};
use tokio::sync::RwLock;
use tracing::debug;

use crate::database::ports::animals::AnimalRepository;
use crate::error::{AnimalError, Result};
use crate::policy::DuplicateIdPolicy;

/// Process-local store. Keys are kept sorted so listings come out in id order.
#[derive(Debug, Default)]
pub struct InMemoryAnimalRepository {
    animals: RwLock<BTreeMap<AnimalId, Animal>>,
}

impl InMemoryAnimalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `animals`. Later entries win on
    /// duplicate ids.
    pub fn with_animals(animals: impl IntoIterator<Item = Animal>) -> Self {
        let animals = animals
            .into_iter()
            .map(|animal| (animal.animal_id, animal))
            .collect();
        Self {
            animals: RwLock::new(animals),
        }
    }

    async fn filtered(&self, predicate: impl Fn(&Animal) -> bool) -> Vec<Animal> {
        self.animals
            .read()
            .await
            .values()
            .filter(|animal| predicate(animal))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl AnimalRepository for InMemoryAnimalRepository {
    async fn list(&self) -> Result<Vec<Animal>> {
        Ok(self.animals.read().await.values().cloned().collect())
    }

    async fn get(&self, id: AnimalId) -> Result<Option<Animal>> {
        Ok(self.animals.read().await.get(&id).cloned())
    }

    async fn find_by_species(&self, species: &str) -> Result<Vec<Animal>> {
        Ok(self.filtered(|animal| animal.matches_species(species)).await)
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Animal>> {
        Ok(self.filtered(|animal| animal.name_contains(name)).await)
    }

    async fn insert(&self, animal: Animal, policy: DuplicateIdPolicy) -> Result<()> {
        let mut animals = self.animals.write().await;
        let id = animal.animal_id;
        if animals.contains_key(&id) {
            match policy {
                DuplicateIdPolicy::Reject => return Err(AnimalError::Conflict(id)),
                DuplicateIdPolicy::Overwrite => {
                    debug!(animal_id = id, "overwriting existing animal");
                }
            }
        }
        animals.insert(id, animal);
        Ok(())
    }

    async fn replace(&self, id: AnimalId, animal: Animal) -> Result<()> {
        let mut animals = self.animals.write().await;
        match animals.get_mut(&id) {
            Some(slot) => {
                *slot = animal.with_id(id);
                Ok(())
            }
            None => Err(AnimalError::NotFound(id)),
        }
    }

    async fn remove(&self, id: AnimalId) -> Result<()> {
        self.animals
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(AnimalError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animal(id: AnimalId, name: &str, species: &str) -> Animal {
        Animal::new(id, name, "Latin name", species, "habitat", "description")
    }

    #[tokio::test]
    async fn list_is_ordered_by_id() {
        let repo = InMemoryAnimalRepository::with_animals([
            animal(7, "Tom", "cat"),
            animal(2, "Rex", "dog"),
            animal(4, "Nemo", "fish"),
        ]);

        let ids: Vec<_> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.animal_id)
            .collect();
        assert_eq!(ids, vec![2, 4, 7]);
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_ids_by_default_policy() {
        let repo = InMemoryAnimalRepository::new();
        repo.insert(animal(1, "Rex", "dog"), DuplicateIdPolicy::Reject)
            .await
            .unwrap();

        let err = repo
            .insert(animal(1, "Fido", "dog"), DuplicateIdPolicy::Reject)
            .await
            .unwrap_err();
        assert!(matches!(err, AnimalError::Conflict(1)));
        assert_eq!(repo.get(1).await.unwrap().unwrap().name, "Rex");
    }

    #[tokio::test]
    async fn insert_overwrites_when_configured() {
        let repo = InMemoryAnimalRepository::with_animals([animal(1, "Rex", "dog")]);

        repo.insert(animal(1, "Fido", "dog"), DuplicateIdPolicy::Overwrite)
            .await
            .unwrap();

        assert_eq!(repo.list().await.unwrap().len(), 1);
        assert_eq!(repo.get(1).await.unwrap().unwrap().name, "Fido");
    }

    #[tokio::test]
    async fn replace_keeps_the_path_id() {
        let repo = InMemoryAnimalRepository::with_animals([animal(1, "Rex", "dog")]);

        repo.replace(1, animal(99, "Rex II", "wolf")).await.unwrap();

        let stored = repo.get(1).await.unwrap().unwrap();
        assert_eq!(stored.animal_id, 1);
        assert_eq!(stored.species, "wolf");
        assert!(repo.get(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn replace_and_remove_report_missing_ids() {
        let repo = InMemoryAnimalRepository::new();

        assert!(matches!(
            repo.replace(5, animal(5, "Ghost", "cat")).await,
            Err(AnimalError::NotFound(5))
        ));
        assert!(matches!(repo.remove(5).await, Err(AnimalError::NotFound(5))));
    }

    #[tokio::test]
    async fn searches_apply_match_semantics() {
        let repo = InMemoryAnimalRepository::with_animals([
            animal(1, "Tom Cat", "cat"),
            animal(2, "Catherine", "Cat"),
            animal(3, "Rex", "dog"),
            animal(4, "Bobcat", "lynx"),
        ]);

        let cats: Vec<_> = repo
            .find_by_species("CAT")
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.animal_id)
            .collect();
        assert_eq!(cats, vec![1, 2]);

        let named: Vec<_> = repo
            .find_by_name("cat")
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.animal_id)
            .collect();
        assert_eq!(named, vec![1, 2, 4]);
    }
}
