pub mod animals;
pub mod health;
