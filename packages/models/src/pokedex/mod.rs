//! Records for the Pokédex app.

mod persistence;
mod pokemon;
mod service;

pub use persistence::PokedexPersistence;
pub use pokemon::{Pokemon, ServicePokemon};
pub use service::{PokeApi, PokedexResult, PokemonResult, POKE_API_BASE};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::text;

/// A page of the PokeAPI species listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pokedex {
    #[serde(rename = "results")]
    pub entries: Vec<PokedexEntry>,
}

impl Pokedex {
    /// Entries whose name contains every whitespace-separated word of `query`,
    /// ignoring case. An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&PokedexEntry> {
        let terms = text::search_terms(query);
        self.entries
            .iter()
            .filter(|entry| text::contains_all(&entry.name.to_lowercase(), &terms))
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PokedexEntry {
    pub name: String,
    pub url: Url,
}

impl PokedexEntry {
    pub fn display_text(&self) -> String {
        text::hyphenated_title(&self.name)
    }
}
