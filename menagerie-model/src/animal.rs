#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Client-supplied primary key of an [`Animal`].
pub type AnimalId = i32;

/// A single catalogue entry.
///
/// On the wire every field is camelCase (`animalId`, `scientificName`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Animal {
    pub animal_id: AnimalId,
    pub name: String,
    pub scientific_name: String,
    pub species: String,
    pub habitat: String,
    pub description: String,
}

impl Animal {
    pub fn new(
        animal_id: AnimalId,
        name: impl Into<String>,
        scientific_name: impl Into<String>,
        species: impl Into<String>,
        habitat: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            animal_id,
            name: name.into(),
            scientific_name: scientific_name.into(),
            species: species.into(),
            habitat: habitat.into(),
            description: description.into(),
        }
    }

    /// Returns the same record re-keyed to `animal_id`.
    pub fn with_id(mut self, animal_id: AnimalId) -> Self {
        self.animal_id = animal_id;
        self
    }

    /// Case-insensitive exact species match, ignoring surrounding spaces.
    pub fn matches_species(&self, species: &str) -> bool {
        trim_spaces(&self.species).to_lowercase() == trim_spaces(species).to_lowercase()
    }

    /// Case-insensitive substring match on the common name.
    pub fn name_contains(&self, name: &str) -> bool {
        self.name
            .to_lowercase()
            .contains(&trim_spaces(name).to_lowercase())
    }
}

// Only ASCII spaces, the same set SQL `TRIM` strips.
fn trim_spaces(value: &str) -> &str {
    value.trim_matches(' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rex() -> Animal {
        Animal::new(3, "Rex", "Canis lupus", "dog", "domestic", "loyal")
    }

    #[test]
    fn species_match_is_exact_but_case_insensitive() {
        let animal = rex();
        assert!(animal.matches_species("dog"));
        assert!(animal.matches_species(" DOG "));
        assert!(!animal.matches_species("do"));
        assert!(!animal.matches_species("dogs"));
    }

    #[test]
    fn only_spaces_are_trimmed_from_searches() {
        let animal = rex();
        assert!(!animal.matches_species("dog\t"));
        assert!(!animal.matches_species("\ndog"));
        assert!(animal.name_contains("  re  "));
        assert!(!animal.name_contains("rex\t"));
    }

    #[test]
    fn name_match_is_substring() {
        let animal = rex();
        assert!(animal.name_contains("rex"));
        assert!(animal.name_contains("E"));
        assert!(!animal.name_contains("rexy"));
    }

    #[test]
    fn with_id_rekeys_without_touching_fields() {
        let moved = rex().with_id(9);
        assert_eq!(moved.animal_id, 9);
        assert_eq!(moved.name, "Rex");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_uses_camel_case_fields() {
        let value = serde_json::to_value(rex()).unwrap();
        assert_eq!(value["animalId"], 3);
        assert_eq!(value["scientificName"], "Canis lupus");
        assert!(value.get("animal_id").is_none());
    }
}
