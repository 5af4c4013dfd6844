//! Request handlers for the animal resource. Every handler is a thin
//! pass-through to [`AnimalService`](menagerie_core::AnimalService).

use axum::{
    Json,
    extract::{Path, Query, State},
};
use menagerie_core::api::{AnimalQuery, NameQuery, SpeciesQuery};
use menagerie_model::{Animal, AnimalId};
use tracing::debug;

use crate::{AppState, infra::errors::AppResult};

pub async fn get_all_animals(State(state): State<AppState>) -> AppResult<Json<Vec<Animal>>> {
    Ok(Json(state.animals().get_all_animals().await?))
}

pub async fn get_one_animal(
    State(state): State<AppState>,
    Path(animal_id): Path<AnimalId>,
) -> AppResult<Json<Animal>> {
    Ok(Json(state.animals().get_animal_by_id(animal_id).await?))
}

/// Combined species/name filter on the collection root.
pub async fn search_animals(
    State(state): State<AppState>,
    Query(query): Query<AnimalQuery>,
) -> AppResult<Json<Vec<Animal>>> {
    debug!(?query, "animal search");
    Ok(Json(state.animals().search(&query).await?))
}

pub async fn get_animals_by_species(
    State(state): State<AppState>,
    Query(SpeciesQuery { species }): Query<SpeciesQuery>,
) -> AppResult<Json<Vec<Animal>>> {
    Ok(Json(state.animals().get_animals_by_species(&species).await?))
}

pub async fn get_animals_by_name(
    State(state): State<AppState>,
    Query(NameQuery { name }): Query<NameQuery>,
) -> AppResult<Json<Vec<Animal>>> {
    Ok(Json(state.animals().get_animals_by_name(&name).await?))
}

/// Returns the full listing after the insert.
pub async fn add_new_animal(
    State(state): State<AppState>,
    Json(animal): Json<Animal>,
) -> AppResult<Json<Vec<Animal>>> {
    state.animals().add_new_animal(animal).await?;
    Ok(Json(state.animals().get_all_animals().await?))
}

/// Returns the record as re-read from the store.
pub async fn update_animal(
    State(state): State<AppState>,
    Path(animal_id): Path<AnimalId>,
    Json(animal): Json<Animal>,
) -> AppResult<Json<Animal>> {
    state.animals().update_animal(animal_id, animal).await?;
    Ok(Json(state.animals().get_animal_by_id(animal_id).await?))
}

/// Returns the full listing after the delete.
pub async fn delete_animal_by_id(
    State(state): State<AppState>,
    Path(animal_id): Path<AnimalId>,
) -> AppResult<Json<Vec<Animal>>> {
    state.animals().delete_animal_by_id(animal_id).await?;
    Ok(Json(state.animals().get_all_animals().await?))
}
