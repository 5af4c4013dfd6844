//! # Menagerie Core
//!
//! Domain logic for the Menagerie animal catalogue.
//!
//! - [`service::AnimalService`]: the operations exposed over HTTP
//! - [`database`]: the [`AnimalRepository`] port plus in-memory and
//!   PostgreSQL implementations
//! - [`api`]: route paths and query types shared with clients
//! - [`policy::DuplicateIdPolicy`]: how creates treat an id that is already taken

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

pub mod api;
pub mod database;
pub mod error;
pub mod policy;
pub mod service;

pub use database::{AnimalRepository, InMemoryAnimalRepository};
#[cfg(feature = "postgres")]
pub use database::PostgresAnimalRepository;
pub use error::{AnimalError, Result};
pub use menagerie_model::{Animal, AnimalId};
pub use policy::DuplicateIdPolicy;
pub use service::AnimalService;

#[cfg(feature = "postgres")]
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
