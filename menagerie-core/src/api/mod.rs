pub mod routes;
pub mod types;

pub use types::{AnimalQuery, NameQuery, SpeciesQuery};
