//! # Menagerie Server
//!
//! HTTP front end for the animal catalogue. Routes live in [`routes`],
//! request handlers in [`handlers`], and configuration, error mapping and
//! startup wiring in [`infra`].

pub mod handlers;
pub mod infra;
pub mod routes;

pub use infra::app_state::AppState;
pub use routes::create_app;
