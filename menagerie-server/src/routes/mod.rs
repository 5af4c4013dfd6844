pub mod animals;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use menagerie_core::api::routes::HEALTH;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::{AppState, handlers::health, infra::config::CorsConfig};

/// Create the route table for every resource.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route(HEALTH, get(health::health_check))
        .merge(animals::create_animal_router())
}

/// Fully layered application, ready to serve.
pub fn create_app(state: AppState) -> Router {
    let cors_layer = build_cors_layer(&state.config().cors);

    let router = create_api_router().layer(TraceLayer::new_for_http());
    let router = match cors_layer {
        Some(layer) => router.layer(layer),
        None => router,
    };

    router.with_state(state)
}

fn build_cors_layer(cors: &CorsConfig) -> Option<CorsLayer> {
    if cors.allowed_origins.is_empty() {
        return None;
    }

    let allow_origin = if cors.is_wildcard() {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = cors
            .allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(origin = %origin, "skipping invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    Some(
        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE]),
    )
}
