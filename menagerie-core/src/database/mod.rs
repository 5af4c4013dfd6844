pub mod infrastructure;
pub mod ports;

pub use infrastructure::memory::InMemoryAnimalRepository;
#[cfg(feature = "postgres")]
pub use infrastructure::postgres::PostgresAnimalRepository;
pub use ports::animals::AnimalRepository;
