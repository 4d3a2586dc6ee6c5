use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{Error, ServiceError};
use crate::types::{map_response, RawResponse, ServiceCallResult};

/// A blocking counterpart of `HttpGetClient` for callers without a runtime.
///
/// Outcomes are mapped exactly as the async client maps them. Must not be
/// used from inside an async context.
#[derive(Debug, Clone)]
pub struct BlockingHttpGetClient {
    client: Client,
}

impl BlockingHttpGetClient {
    pub fn new() -> Result<Self, Error> {
        Self::with_config(&ClientConfig::default())
    }

    pub fn with_config(config: &ClientConfig) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(config.timeout())
            .default_headers(config.default_headers()?)
            .pool_max_idle_per_host(0)
            .build()?;

        Ok(Self { client })
    }

    fn execute(&self, url: &Url) -> Result<RawResponse, String> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| e.to_string())?;

        let status = response.status().as_u16();
        let body = response.bytes().map_err(|e| e.to_string())?;

        Ok(RawResponse {
            status: Some(status),
            body,
        })
    }

    pub fn get(&self, url: &Url) -> ServiceCallResult {
        log::debug!("GET {}", url);
        map_response(self.execute(url))
    }

    pub fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T, ServiceError> {
        let body = self.get(url)?;
        serde_json::from_slice(&body).map_err(|e| ServiceError::new(e.to_string(), None))
    }
}
