use async_trait::async_trait;
use menagerie_model::{Animal, AnimalId};
use sqlx::PgPool;
use tracing::debug;

use crate::database::ports::animals::AnimalRepository;
use crate::error::{AnimalError, Result};
use crate::policy::DuplicateIdPolicy;

#[derive(Debug, Clone)]
pub struct PostgresAnimalRepository {
    pool: PgPool,
}

impl PostgresAnimalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to `database_url` with a small default pool.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
            .map_err(|e| AnimalError::Database(format!("Failed to connect: {e}")))?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Apply the embedded migrations.
    pub async fn migrate(&self) -> Result<()> {
        crate::MIGRATOR
            .run(self.pool())
            .await
            .map_err(|e| AnimalError::Database(format!("Failed to run migrations: {e}")))
    }
}

#[async_trait]
impl AnimalRepository for PostgresAnimalRepository {
    async fn list(&self) -> Result<Vec<Animal>> {
        sqlx::query_as::<_, Animal>(
            r#"
            SELECT animal_id, name, scientific_name, species, habitat, description
            FROM animals
            ORDER BY animal_id
            "#,
        )
        .fetch_all(self.pool())
        .await
        .map_err(|e| AnimalError::Database(format!("Failed to list animals: {e}")))
    }

    async fn get(&self, id: AnimalId) -> Result<Option<Animal>> {
        sqlx::query_as::<_, Animal>(
            r#"
            SELECT animal_id, name, scientific_name, species, habitat, description
            FROM animals
            WHERE animal_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| AnimalError::Database(format!("Failed to load animal {id}: {e}")))
    }

    async fn find_by_species(&self, species: &str) -> Result<Vec<Animal>> {
        sqlx::query_as::<_, Animal>(
            r#"
            SELECT animal_id, name, scientific_name, species, habitat, description
            FROM animals
            WHERE LOWER(TRIM(species)) = LOWER(TRIM($1))
            ORDER BY animal_id
            "#,
        )
        .bind(species)
        .fetch_all(self.pool())
        .await
        .map_err(|e| AnimalError::Database(format!("Failed to search by species: {e}")))
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Animal>> {
        // strpos avoids having to escape LIKE wildcards in user input
        sqlx::query_as::<_, Animal>(
            r#"
            SELECT animal_id, name, scientific_name, species, habitat, description
            FROM animals
            WHERE strpos(LOWER(name), LOWER(TRIM($1))) > 0
            ORDER BY animal_id
            "#,
        )
        .bind(name)
        .fetch_all(self.pool())
        .await
        .map_err(|e| AnimalError::Database(format!("Failed to search by name: {e}")))
    }

    async fn insert(&self, animal: Animal, policy: DuplicateIdPolicy) -> Result<()> {
        let id = animal.animal_id;
        let sql = match policy {
            DuplicateIdPolicy::Reject => {
                r#"
                INSERT INTO animals
                    (animal_id, name, scientific_name, species, habitat, description)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#
            }
            DuplicateIdPolicy::Overwrite => {
                r#"
                INSERT INTO animals
                    (animal_id, name, scientific_name, species, habitat, description)
                VALUES ($1, $2, $3, $4, $5, $6)
                ON CONFLICT (animal_id) DO UPDATE SET
                    name = EXCLUDED.name,
                    scientific_name = EXCLUDED.scientific_name,
                    species = EXCLUDED.species,
                    habitat = EXCLUDED.habitat,
                    description = EXCLUDED.description
                "#
            }
        };

        sqlx::query(sql)
            .bind(id)
            .bind(animal.name)
            .bind(animal.scientific_name)
            .bind(animal.species)
            .bind(animal.habitat)
            .bind(animal.description)
            .execute(self.pool())
            .await
            .map_err(|e| {
                let unique_violation = e
                    .as_database_error()
                    .is_some_and(|db| db.is_unique_violation());
                if unique_violation {
                    AnimalError::Conflict(id)
                } else {
                    AnimalError::Database(format!("Failed to insert animal {id}: {e}"))
                }
            })?;

        debug!(animal_id = id, %policy, "animal row written");
        Ok(())
    }

    async fn replace(&self, id: AnimalId, animal: Animal) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE animals SET
                name = $2,
                scientific_name = $3,
                species = $4,
                habitat = $5,
                description = $6
            WHERE animal_id = $1
            "#,
        )
        .bind(id)
        .bind(animal.name)
        .bind(animal.scientific_name)
        .bind(animal.species)
        .bind(animal.habitat)
        .bind(animal.description)
        .execute(self.pool())
        .await
        .map_err(|e| AnimalError::Database(format!("Failed to update animal {id}: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(AnimalError::NotFound(id));
        }
        Ok(())
    }

    async fn remove(&self, id: AnimalId) -> Result<()> {
        let result = sqlx::query("DELETE FROM animals WHERE animal_id = $1")
            .bind(id)
            .execute(self.pool())
            .await
            .map_err(|e| AnimalError::Database(format!("Failed to delete animal {id}: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(AnimalError::NotFound(id));
        }
        Ok(())
    }
}
