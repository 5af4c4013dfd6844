//! Core data model definitions shared across Menagerie crates.
#![allow(missing_docs)]

pub mod animal;

pub use animal::{Animal, AnimalId};
