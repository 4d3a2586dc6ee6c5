//! Transport abstraction for testing.
//!
//! `HttpGetClient` only interprets what an executor hands back, so tests can
//! swap the network for canned responses.

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::config::ClientConfig;
use crate::error::Error;
use crate::types::RawResponse;

/// Performs a single GET.
///
/// Returns `Err` with the transport's message when no response arrived.
#[async_trait]
pub trait HttpExecutor: Send + Sync {
    async fn get(&self, url: &Url) -> Result<RawResponse, String>;
}

/// Production executor using reqwest.
///
/// Idle connections are not pooled, so every call opens and tears down its
/// own connection.
#[derive(Debug, Clone)]
pub struct ReqwestExecutor {
    client: Client,
}

impl ReqwestExecutor {
    pub fn new(config: &ClientConfig) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(config.timeout())
            .default_headers(config.default_headers()?)
            .pool_max_idle_per_host(0)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpExecutor for ReqwestExecutor {
    async fn get(&self, url: &Url) -> Result<RawResponse, String> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| e.to_string())?;

        Ok(RawResponse {
            status: Some(status),
            body,
        })
    }
}
