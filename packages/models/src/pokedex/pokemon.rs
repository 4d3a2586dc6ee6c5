use serde::{Deserialize, Serialize};
use url::Url;

use crate::text;

/// A Pokémon as PokeAPI describes it, reduced to what the app shows.
///
/// Decoded from the `/pokemon/{name}` payload: type names are lifted out of
/// `types[].type.name` and the sprite from `sprites.front_default`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(from = "wire::ServicePokemon")]
pub struct ServicePokemon {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub types: Vec<String>,
    pub sprite_url: Url,
}

mod wire {
    use serde::Deserialize;
    use url::Url;

    #[derive(Deserialize)]
    pub(super) struct ServicePokemon {
        id: u32,
        name: String,
        height: u32,
        types: Vec<TypeSlot>,
        sprites: Sprites,
    }

    #[derive(Deserialize)]
    struct TypeSlot {
        #[serde(rename = "type")]
        kind: NamedResource,
    }

    #[derive(Deserialize)]
    struct NamedResource {
        name: String,
    }

    #[derive(Deserialize)]
    struct Sprites {
        front_default: Url,
    }

    impl From<ServicePokemon> for super::ServicePokemon {
        fn from(wire: ServicePokemon) -> Self {
            Self {
                id: wire.id,
                name: wire.name,
                height: wire.height,
                types: wire.types.into_iter().map(|slot| slot.kind.name).collect(),
                sprite_url: wire.sprites.front_default,
            }
        }
    }
}

/// A Pokémon ready to display and persist, sprite included.
///
/// Stored under its `name`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub types: Vec<String>,
    #[serde(with = "base64_bytes")]
    pub sprite: Vec<u8>,
}

impl Pokemon {
    pub fn new(service: ServicePokemon, sprite: Vec<u8>) -> Self {
        Self {
            id: service.id,
            name: service.name,
            height: service.height,
            types: service.types,
            sprite,
        }
    }

    pub fn display_name(&self) -> String {
        text::hyphenated_title(&self.name)
    }

    /// `"Electric, Flying"`
    pub fn display_types(&self) -> String {
        self.types
            .iter()
            .map(|kind| text::first_letter_uppercased(kind))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded).map_err(serde::de::Error::custom)
    }
}
