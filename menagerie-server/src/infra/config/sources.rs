use std::path::PathBuf;

use menagerie_core::DuplicateIdPolicy;
use serde::Deserialize;

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub server: FileServerConfig,
    #[serde(default)]
    pub database: FileDatabaseConfig,
    #[serde(default)]
    pub store: FileStoreConfig,
    #[serde(default)]
    pub cors: FileCorsConfig,
    #[serde(default)]
    pub seed: FileSeedConfig,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileDatabaseConfig {
    pub url: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileStoreConfig {
    pub duplicate_ids: Option<DuplicateIdPolicy>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileCorsConfig {
    pub allowed_origins: Option<Vec<String>>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSeedConfig {
    pub path: Option<PathBuf>,
}

/// Values read from the process environment.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub server_host: Option<String>,
    pub server_port: Option<String>,
    pub database_url: Option<String>,
    pub duplicate_ids: Option<String>,
    pub cors_allowed_origins: Option<Vec<String>>,
    pub seed_path: Option<PathBuf>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup, e.g. a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            config_path: non_empty("MENAGERIE_CONFIG").map(PathBuf::from),
            server_host: non_empty("MENAGERIE_HOST"),
            server_port: non_empty("MENAGERIE_PORT"),
            database_url: non_empty("DATABASE_URL"),
            duplicate_ids: non_empty("MENAGERIE_DUPLICATE_IDS"),
            cors_allowed_origins: non_empty("MENAGERIE_CORS_ALLOWED_ORIGINS")
                .map(|raw| parse_csv(&raw)),
            seed_path: non_empty("MENAGERIE_SEED_PATH").map(PathBuf::from),
        }
    }
}

/// Highest-precedence values, typically from command-line flags.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database_url: Option<String>,
    pub duplicate_ids: Option<DuplicateIdPolicy>,
    pub seed_path: Option<PathBuf>,
}

pub fn parse_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter_map(|part| {
            let trimmed = part.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn lookup_ignores_blank_values_and_splits_csv() {
        let vars = HashMap::from([
            ("MENAGERIE_HOST", "   "),
            ("MENAGERIE_PORT", "9000"),
            (
                "MENAGERIE_CORS_ALLOWED_ORIGINS",
                "http://a.test, ,http://b.test",
            ),
        ]);
        let env = EnvConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(env.server_host, None);
        assert_eq!(env.server_port.as_deref(), Some("9000"));
        assert_eq!(
            env.cors_allowed_origins,
            Some(vec!["http://a.test".to_string(), "http://b.test".to_string()])
        );
    }
}
