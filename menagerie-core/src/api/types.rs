use serde::Deserialize;

/// Species searched when the parameter is omitted.
pub const DEFAULT_SPECIES: &str = "dog";
/// Name searched when the parameter is omitted.
pub const DEFAULT_NAME: &str = "cat";

fn default_species() -> String {
    DEFAULT_SPECIES.to_string()
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesQuery {
    #[serde(default = "default_species")]
    pub species: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NameQuery {
    #[serde(default = "default_name")]
    pub name: String,
}

/// Combined filter accepted on the collection root.
///
/// `species` takes precedence and is narrowed by `name` when both are
/// present. With neither present the species default applies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AnimalQuery {
    pub species: Option<String>,
    pub name: Option<String>,
}

impl AnimalQuery {
    pub fn species(species: impl Into<String>) -> Self {
        Self {
            species: Some(species.into()),
            name: None,
        }
    }

    pub fn name(name: impl Into<String>) -> Self {
        Self {
            species: None,
            name: Some(name.into()),
        }
    }
}
