use std::{
    fs,
    path::{Path, PathBuf},
};

use menagerie_core::DuplicateIdPolicy;
use thiserror::Error;

use super::{
    models::{
        Config, ConfigMetadata, CorsConfig, DEFAULT_HOST, DEFAULT_PORT, DatabaseConfig,
        SeedConfig, ServerConfig, StoreConfig,
    },
    sources::{ConfigOverrides, EnvConfig, FileConfig},
    validation::{self, ConfigWarnings},
};

const DEFAULT_CONFIG_LOCATIONS: &[&str] = &["menagerie.toml", "config/menagerie.toml"];

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
    pub overrides: ConfigOverrides,
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

/// Composes configuration with precedence overrides > environment > file >
/// defaults.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        self.options.overrides = overrides;
        self
    }

    /// Load `.env`, read the process environment, then compose.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true).or_else(
                |err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                },
            )?,
            None => dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                dotenvy::Error::Io(_) => Ok(false),
                _ => Err(err),
            })?,
        };

        self.load_from_env(EnvConfig::gather(), env_file_loaded)
    }

    /// Compose from an already gathered environment. Never touches the
    /// process environment.
    pub fn load_from_env(
        &self,
        env: EnvConfig,
        env_file_loaded: bool,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let (file_config, config_path) = self.load_file_config(&env)?;
        let mut warnings = ConfigWarnings::default();

        if config_path.is_none() {
            warnings.push_with_hint(
                "No menagerie.toml detected; using environment variables and defaults",
                "Pass --config or set MENAGERIE_CONFIG to load a configuration file",
            );
        }

        let config = self.compose_config(
            file_config.unwrap_or_default(),
            env,
            ConfigMetadata {
                config_path,
                env_file_loaded,
            },
        )?;

        warnings.extend(validation::review(&config));

        Ok(ConfigLoad { config, warnings })
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let explicit = self
            .options
            .config_path
            .clone()
            .or_else(|| env.config_path.clone());

        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigLoadError::MissingConfig { path });
                }
                path
            }
            None => match DEFAULT_CONFIG_LOCATIONS
                .iter()
                .map(Path::new)
                .find(|candidate| candidate.exists())
            {
                Some(found) => found.to_path_buf(),
                None => return Ok((None, None)),
            },
        };

        let contents = fs::read_to_string(&path).map_err(|source| ConfigLoadError::Io {
            path: path.clone(),
            source,
        })?;
        let file_config: FileConfig =
            toml::from_str(&contents).map_err(|source| ConfigLoadError::Parse {
                path: path.clone(),
                source,
            })?;

        Ok((Some(file_config), Some(path)))
    }

    fn compose_config(
        &self,
        file: FileConfig,
        env: EnvConfig,
        metadata: ConfigMetadata,
    ) -> Result<Config, ConfigLoadError> {
        let overrides = &self.options.overrides;

        let env_port = env
            .server_port
            .as_deref()
            .map(|raw| {
                raw.trim()
                    .parse::<u16>()
                    .map_err(|_| ConfigLoadError::InvalidValue {
                        key: "MENAGERIE_PORT",
                        message: format!("'{raw}' is not a valid port"),
                    })
            })
            .transpose()?;

        let env_duplicate_ids = env
            .duplicate_ids
            .as_deref()
            .map(|raw| {
                raw.parse::<DuplicateIdPolicy>()
                    .map_err(|message| ConfigLoadError::InvalidValue {
                        key: "MENAGERIE_DUPLICATE_IDS",
                        message,
                    })
            })
            .transpose()?;

        let server = ServerConfig {
            host: overrides
                .host
                .clone()
                .or(env.server_host)
                .or(file.server.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: overrides
                .port
                .or(env_port)
                .or(file.server.port)
                .unwrap_or(DEFAULT_PORT),
        };

        let database_url = overrides
            .database_url
            .clone()
            .or(env.database_url)
            .or(file.database.url);
        if let Some(url) = &database_url {
            validate_database_url(url)?;
        }

        let store = StoreConfig {
            duplicate_ids: overrides
                .duplicate_ids
                .or(env_duplicate_ids)
                .or(file.store.duplicate_ids)
                .unwrap_or_default(),
        };

        let cors = CorsConfig {
            allowed_origins: env
                .cors_allowed_origins
                .or(file.cors.allowed_origins)
                .unwrap_or_default(),
        };

        let seed = SeedConfig {
            path: overrides
                .seed_path
                .clone()
                .or(env.seed_path)
                .or(file.seed.path),
        };

        Ok(Config {
            server,
            database: DatabaseConfig { url: database_url },
            store,
            cors,
            seed,
            metadata,
        })
    }
}

fn validate_database_url(url: &str) -> Result<(), ConfigLoadError> {
    if url.starts_with("postgres://") || url.starts_with("postgresql://") {
        Ok(())
    } else {
        Err(ConfigLoadError::InvalidValue {
            key: "DATABASE_URL",
            message: "must start with postgres:// or postgresql://".to_string(),
        })
    }
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("configuration file missing: {path}")]
    MissingConfig { path: PathBuf },
    #[error("failed to read configuration {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
    #[error("failed to load .env file")]
    EnvFile(#[from] dotenvy::Error),
}
