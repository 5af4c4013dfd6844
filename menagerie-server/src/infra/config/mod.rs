pub mod loader;
pub mod models;
pub mod sources;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoadError, ConfigLoader, ConfigLoaderOptions};
pub use models::{
    Config, ConfigMetadata, CorsConfig, DatabaseConfig, SeedConfig, ServerConfig, StoreConfig,
};
pub use sources::{ConfigOverrides, EnvConfig, FileConfig};
pub use validation::{ConfigWarning, ConfigWarnings};
