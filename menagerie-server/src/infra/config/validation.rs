use super::models::Config;

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(&mut self, message: S, hint: H) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }
}

/// Non-fatal checks run after the configuration has been composed.
pub fn review(config: &Config) -> ConfigWarnings {
    let mut warnings = ConfigWarnings::default();

    if !config.is_persistent() {
        warnings.push_with_hint(
            "No database configured; animals are kept in memory and lost on restart",
            "Set DATABASE_URL or [database].url to use PostgreSQL",
        );
        if config.seed.path.is_none() {
            warnings.push("In-memory store starts empty (no seed file configured)");
        }
    } else if config.seed.path.is_some() {
        warnings.push("Seed file is ignored when a database is configured");
    }

    if config.cors.is_wildcard() {
        warnings.push_with_hint(
            "CORS allows any origin",
            "List explicit origins in [cors].allowed_origins",
        );
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn seed_with_database_is_flagged() {
        let mut config = Config::default();
        config.database.url = Some("postgres://localhost/menagerie".into());
        config.seed.path = Some(PathBuf::from("seed.json"));

        let warnings = review(&config);
        assert_eq!(warnings.items.len(), 1);
        assert!(warnings.items[0].message.contains("ignored"));
    }

    #[test]
    fn in_memory_store_warns_about_persistence() {
        let warnings = review(&Config::default());
        assert!(
            warnings
                .items
                .iter()
                .any(|w| w.message.contains("lost on restart") && w.hint.is_some())
        );
    }
}
