use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use objectlib_file_store::FileStore;
use objectlib_http::{HttpGetClient, Url};
use objectlib_models::{PokeApi, PokedexPersistence, Pokemon};

const SPRITE: &[u8] = b"\x89PNG\r\n\x1a\nnot really a png";

async fn mount_pikachu(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/pikachu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 25,
            "name": "pikachu",
            "height": 4,
            "types": [{"slot": 1, "type": {"name": "electric", "url": "https://pokeapi.co/api/v2/type/13/"}}],
            "sprites": {"front_default": format!("{}/sprites/25.png", server.uri())}
        })))
        .mount(server)
        .await;
}

fn api(server: &MockServer) -> PokeApi {
    PokeApi::new(
        HttpGetClient::new().unwrap(),
        Url::parse(&server.uri()).unwrap(),
    )
}

#[tokio::test]
async fn test_fetch_pokedex_listing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1302,
            "results": [
                {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
                {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/"}
            ]
        })))
        .mount(&server)
        .await;

    let pokedex = api(&server).pokedex(0, 2).await.unwrap();

    assert_eq!(pokedex.entries.len(), 2);
    assert_eq!(pokedex.entries[1].display_text(), "Ivysaur");
}

#[tokio::test]
async fn test_fetch_pokemon_with_sprite() {
    let server = MockServer::start().await;
    mount_pikachu(&server).await;

    Mock::given(method("GET"))
        .and(path("/sprites/25.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(SPRITE.to_vec()))
        .mount(&server)
        .await;

    let pokemon = api(&server).pokemon("pikachu").await.unwrap();

    assert_eq!(pokemon.id, 25);
    assert_eq!(pokemon.display_name(), "Pikachu");
    assert_eq!(pokemon.display_types(), "Electric");
    assert_eq!(pokemon.sprite, SPRITE);
}

#[tokio::test]
async fn test_missing_sprite_fails_the_fetch() {
    let server = MockServer::start().await;
    mount_pikachu(&server).await;

    Mock::given(method("GET"))
        .and(path("/sprites/25.png"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let error = api(&server).pokemon("pikachu").await.unwrap_err();

    assert_eq!(error.code, Some(404));
}

#[tokio::test]
async fn test_unknown_pokemon_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let error = api(&server).pokemon("missingno").await.unwrap_err();

    assert_eq!(error.code, Some(404));
    assert_eq!(error.message, "not found");
}

#[tokio::test]
async fn test_fetched_records_persist() {
    let server = MockServer::start().await;
    mount_pikachu(&server).await;

    Mock::given(method("GET"))
        .and(path("/sprites/25.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(SPRITE.to_vec()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"name": "pikachu", "url": format!("{}/api/v2/pokemon/pikachu", server.uri())}]
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let api = api(&server);

    let pokedex = api.pokedex(0, 1).await.unwrap();
    let persistence = PokedexPersistence::new(dir.path().join("Pokédex"));
    assert!(persistence.save(&pokedex));
    assert_eq!(persistence.pokedex(), Some(pokedex.clone()));

    let pokemon = api.pokemon_for(&pokedex.entries[0]).await.unwrap();
    let store: FileStore<Pokemon> = FileStore::new(dir.path().join("Pokémon"), "json");
    assert!(store.save(&pokemon, &pokemon.name));
    assert_eq!(store.read("pikachu"), Some(pokemon));
}
