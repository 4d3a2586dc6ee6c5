use objectlib_http::{url_for, HttpGetClient, ServiceError};
use url::Url;

use super::{Pokedex, PokedexEntry, Pokemon, ServicePokemon};

pub const POKE_API_BASE: &str = "https://pokeapi.co";

pub type PokedexResult = Result<Pokedex, ServiceError>;

pub type PokemonResult = Result<Pokemon, ServiceError>;

/// Fetches listings and Pokémon from PokeAPI.
#[derive(Debug, Clone)]
pub struct PokeApi {
    client: HttpGetClient,
    base: Url,
}

impl PokeApi {
    pub fn new(client: HttpGetClient, base: Url) -> Self {
        Self { client, base }
    }

    pub fn with_default_base(client: HttpGetClient) -> Result<Self, objectlib_http::Error> {
        Ok(Self::new(client, objectlib_http::parse_base(POKE_API_BASE)?))
    }

    /// `{base}/api/v2/pokemon?offset={offset}&limit={limit}`
    pub fn pokedex_url(&self, offset: u32, limit: u32) -> Url {
        url_for(
            &self.base,
            &["api", "v2", "pokemon"],
            [("offset", offset.to_string()), ("limit", limit.to_string())],
        )
    }

    pub fn pokemon_url(&self, name: &str) -> Url {
        url_for(
            &self.base,
            &["api", "v2", "pokemon", name],
            [] as [(&str, &str); 0],
        )
    }

    pub async fn pokedex(&self, offset: u32, limit: u32) -> PokedexResult {
        self.client.get_json(&self.pokedex_url(offset, limit)).await
    }

    pub async fn pokemon(&self, name: &str) -> PokemonResult {
        self.pokemon_at(&self.pokemon_url(name)).await
    }

    pub async fn pokemon_for(&self, entry: &PokedexEntry) -> PokemonResult {
        self.pokemon_at(&entry.url).await
    }

    /// Fetches the record, then its sprite. Either failure fails the whole call.
    async fn pokemon_at(&self, url: &Url) -> PokemonResult {
        let service: ServicePokemon = self.client.get_json(url).await?;
        let sprite = self.client.get(&service.sprite_url).await?;
        log::debug!("Fetched {} ({} byte sprite)", service.name, sprite.len());
        Ok(Pokemon::new(service, sprite.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> PokeApi {
        PokeApi::with_default_base(HttpGetClient::new().unwrap()).unwrap()
    }

    #[test]
    fn pokedex_url_keeps_parameter_order() {
        assert_eq!(
            api().pokedex_url(0, 964).as_str(),
            "https://pokeapi.co/api/v2/pokemon?offset=0&limit=964"
        );
    }

    #[test]
    fn pokemon_url_appends_name() {
        assert_eq!(
            api().pokemon_url("mr-mime").as_str(),
            "https://pokeapi.co/api/v2/pokemon/mr-mime"
        );
    }
}
