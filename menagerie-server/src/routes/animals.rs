use axum::{
    Router,
    routing::{delete, get, post, put},
};
use menagerie_core::api::routes::animals;

use crate::{AppState, handlers::animals as handlers};

/// Explicit (method, path) table for the animal resource.
///
/// Species and name search live on their own paths; the collection root
/// accepts both parameters at once.
pub fn create_animal_router() -> Router<AppState> {
    Router::new()
        .route(animals::ROOT, get(handlers::search_animals))
        .route(animals::ALL, get(handlers::get_all_animals))
        .route(animals::BY_SPECIES, get(handlers::get_animals_by_species))
        .route(animals::BY_NAME, get(handlers::get_animals_by_name))
        .route(animals::CREATE, post(handlers::add_new_animal))
        .route(animals::UPDATE, put(handlers::update_animal))
        .route(animals::DELETE, delete(handlers::delete_animal_by_id))
        .route(animals::ITEM, get(handlers::get_one_animal))
}
