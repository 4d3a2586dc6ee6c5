use std::path;

use objectlib_file_store::{fs_utils, Error as StoreError, Persistence};

use super::Pokedex;

const IDENTIFIER: &str = "Pokédex";

/// Keeps the single cached Pokédex listing.
pub struct PokedexPersistence {
    directory: path::PathBuf,
}

impl PokedexPersistence {
    pub fn new(directory: impl Into<path::PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Persistence in `directory_name` under the platform's user-data root.
    pub fn in_user_data(directory_name: &str) -> Result<Self, StoreError> {
        Ok(Self::new(fs_utils::user_data_root()?.join(directory_name)))
    }

    /// The stored listing, if one has been saved and still decodes.
    pub fn pokedex(&self) -> Option<Pokedex> {
        self.files().first().and_then(|file| self.read_at(file))
    }

    pub fn save(&self, pokedex: &Pokedex) -> bool {
        self.save_with_id(pokedex, IDENTIFIER)
    }
}

impl Persistence for PokedexPersistence {
    fn directory(&self) -> &path::Path {
        &self.directory
    }

    fn file_type(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pokedex::PokedexEntry;

    fn listing() -> Pokedex {
        Pokedex {
            entries: vec![PokedexEntry {
                name: "bulbasaur".to_string(),
                url: "https://pokeapi.co/api/v2/pokemon/1/".parse().unwrap(),
            }],
        }
    }

    #[test]
    fn empty_until_saved() {
        let dir = tempfile::tempdir().unwrap();
        let persistence = PokedexPersistence::new(dir.path().join("Pokédex"));
        assert_eq!(persistence.pokedex(), None);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let persistence = PokedexPersistence::new(dir.path().join("Pokédex"));

        assert!(persistence.save(&listing()));
        assert_eq!(persistence.pokedex(), Some(listing()));
        assert_eq!(persistence.ids(), vec!["Pokédex".to_string()]);
    }

    #[test]
    fn saving_again_replaces_the_listing() {
        let dir = tempfile::tempdir().unwrap();
        let persistence = PokedexPersistence::new(dir.path());

        assert!(persistence.save(&listing()));
        let empty = Pokedex {
            entries: Vec::new(),
        };
        assert!(persistence.save(&empty));

        assert_eq!(persistence.files().len(), 1);
        assert_eq!(persistence.pokedex(), Some(empty));
    }
}
