//! # objectlib-models
//!
//! Plain records for three small apps, each built on the shared file store
//! and GET client:
//!
//! - [`pokedex`]: PokeAPI listings and Pokémon, their persistence and fetching
//! - [`contacts`]: contacts with optional US addresses, editable field by field
//! - [`pig`]: dice, players and rolls for the game of Pig

pub mod contacts;
pub mod pig;
pub mod pokedex;
pub mod text;

pub use contacts::{Address, Contact, InputField, State};
pub use pig::{Die, DieChange, Player, PlayerId, Roll};
pub use pokedex::{PokeApi, Pokedex, PokedexEntry, PokedexPersistence, Pokemon, ServicePokemon};
