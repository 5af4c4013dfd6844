macro_rules! animals_path {
    ($path:literal) => {
        concat!("/animals", $path)
    };
}

/// Route definitions for the animal resource.
pub mod animals {
    pub const ROOT: &str = "/animals";

    pub const ALL: &str = animals_path!("/all");
    pub const ITEM: &str = animals_path!("/{id}");
    pub const BY_SPECIES: &str = animals_path!("/species");
    pub const BY_NAME: &str = animals_path!("/name");
    pub const CREATE: &str = animals_path!("/new");
    pub const UPDATE: &str = animals_path!("/update/{id}");
    pub const DELETE: &str = animals_path!("/delete/{id}");

    /// Substitute a concrete id into one of the `{id}` templates.
    pub fn with_id(template: &str, id: i32) -> String {
        template.replace("{id}", &id.to_string())
    }
}

pub const HEALTH: &str = "/health";

#[cfg(test)]
mod tests {
    use super::animals;

    #[test]
    fn templates_expand_ids() {
        assert_eq!(animals::with_id(animals::ITEM, 3), "/animals/3");
        assert_eq!(animals::with_id(animals::UPDATE, 12), "/animals/update/12");
        assert_eq!(animals::with_id(animals::DELETE, -1), "/animals/delete/-1");
    }
}
