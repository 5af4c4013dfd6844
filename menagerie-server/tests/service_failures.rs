use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use axum::http::StatusCode;
use menagerie_core::{
    Animal, AnimalError, AnimalId, AnimalRepository, DuplicateIdPolicy, api::routes::animals,
};
use serde_json::Value;

mod common;
use common::{animal, build_state_with, server_for};

/// Store whose backend is always down.
struct UnavailableRepository;

fn unavailable<T>() -> menagerie_core::Result<T> {
    Err(AnimalError::Database("connection refused by 10.0.0.5".into()))
}

#[async_trait]
impl AnimalRepository for UnavailableRepository {
    async fn list(&self) -> menagerie_core::Result<Vec<Animal>> {
        unavailable()
    }

    async fn get(&self, _id: AnimalId) -> menagerie_core::Result<Option<Animal>> {
        unavailable()
    }

    async fn find_by_species(&self, _species: &str) -> menagerie_core::Result<Vec<Animal>> {
        unavailable()
    }

    async fn find_by_name(&self, _name: &str) -> menagerie_core::Result<Vec<Animal>> {
        unavailable()
    }

    async fn insert(
        &self,
        _animal: Animal,
        _policy: DuplicateIdPolicy,
    ) -> menagerie_core::Result<()> {
        unavailable()
    }

    async fn replace(&self, _id: AnimalId, _animal: Animal) -> menagerie_core::Result<()> {
        unavailable()
    }

    async fn remove(&self, _id: AnimalId) -> menagerie_core::Result<()> {
        unavailable()
    }
}

#[tokio::test]
async fn store_failures_surface_as_internal_errors() -> Result<()> {
    let state = build_state_with(Arc::new(UnavailableRepository), DuplicateIdPolicy::Reject);
    let server = server_for(state)?;

    let responses = [
        server.get(animals::ALL).await,
        server.get(&animals::with_id(animals::ITEM, 1)).await,
        server.get(animals::BY_SPECIES).await,
        server.get(animals::BY_NAME).await,
        server.post(animals::CREATE).json(&animal(1, "Rex", "dog")).await,
        server
            .put(&animals::with_id(animals::UPDATE, 1))
            .json(&animal(1, "Rex", "dog"))
            .await,
        server.delete(&animals::with_id(animals::DELETE, 1)).await,
    ];

    for response in responses {
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["error"]["status"], 500);
        assert!(!body["error"]["message"].as_str().unwrap_or_default().contains("10.0.0.5"));
    }
    Ok(())
}

#[tokio::test]
async fn health_reports_store_kind() -> Result<()> {
    let state = build_state_with(Arc::new(UnavailableRepository), DuplicateIdPolicy::Reject);
    let server = server_for(state)?;

    let response = server.get(menagerie_core::api::routes::HEALTH).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["store"], "memory");
    Ok(())
}
