#![cfg(feature = "blocking")]

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use objectlib_http::blocking::BlockingHttpGetClient;
use objectlib_http::{url_for, ClientConfig, Error, ServiceError, Url};

fn endpoint(uri: &str, segments: &[&str]) -> Url {
    let base = Url::parse(uri).unwrap();
    url_for(&base, segments, [] as [(&str, &str); 0])
}

#[tokio::test(flavor = "multi_thread")]
async fn test_blocking_get_maps_outcomes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ok"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id":25}"#))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/empty"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let uri = server.uri();

    let (ok, empty, missing) = tokio::task::spawn_blocking(move || {
        let client = BlockingHttpGetClient::new().unwrap();
        (
            client.get(&endpoint(&uri, &["ok"])),
            client.get(&endpoint(&uri, &["empty"])),
            client.get(&endpoint(&uri, &["missing"])),
        )
    })
    .await
    .unwrap();

    assert_eq!(&ok.unwrap()[..], br#"{"id":25}"#);
    assert_eq!(empty, Err(ServiceError::no_data()));
    assert_eq!(missing.unwrap_err().code, Some(404));
}

#[test]
fn test_blocking_client_rejects_invalid_accept_header() {
    let config = ClientConfig {
        accept: "application/json\n".to_string(),
        ..ClientConfig::default()
    };
    assert!(matches!(
        BlockingHttpGetClient::with_config(&config),
        Err(Error::InvalidHeaderValue(_))
    ));
}
