use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::task::JoinHandle;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{Error, ServiceError};
use crate::executor::{HttpExecutor, ReqwestExecutor};
use crate::types::{map_response, ServiceCallResult};

/// Issues GET requests and reports each outcome as a `ServiceCallResult`.
///
/// Every call is independent: there are no retries, no caching and no state
/// shared between calls. Cloning is cheap and clones share the transport.
///
/// # Example
///
/// ```ignore
/// use objectlib_http::{url_for, HttpGetClient};
///
/// let client = HttpGetClient::new()?;
/// let base = url::Url::parse("https://pokeapi.co")?;
/// let url = url_for(&base, &["api", "v2", "pokemon"], [("offset", "0"), ("limit", "964")]);
///
/// match client.get(&url).await {
///     Ok(bytes) => println!("{} bytes", bytes.len()),
///     Err(error) => println!("{} ({:?})", error.message, error.code),
/// }
/// ```
#[derive(Clone)]
pub struct HttpGetClient {
    executor: Arc<dyn HttpExecutor>,
}

impl HttpGetClient {
    /// A client with a 60 second timeout that accepts JSON.
    pub fn new() -> Result<Self, Error> {
        Self::with_config(&ClientConfig::default())
    }

    pub fn with_config(config: &ClientConfig) -> Result<Self, Error> {
        Ok(Self::with_executor(ReqwestExecutor::new(config)?))
    }

    pub fn with_executor(executor: impl HttpExecutor + 'static) -> Self {
        Self {
            executor: Arc::new(executor),
        }
    }

    pub async fn get(&self, url: &Url) -> ServiceCallResult {
        log::debug!("GET {}", url);
        let result = map_response(self.executor.get(url).await);
        if let Err(error) = &result {
            log::debug!("GET {} failed: {} (code {:?})", url, error.message, error.code);
        }
        result
    }

    /// `get`, then decode the body as JSON.
    ///
    /// A body that does not decode as `T` becomes an error with no code.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T, ServiceError> {
        let body = self.get(url).await?;
        serde_json::from_slice(&body).map_err(|e| ServiceError::new(e.to_string(), None))
    }

    /// Runs `get` on a spawned task and hands the result to `completion`.
    ///
    /// The task owns its own clone of the client, so it may outlive `self`.
    /// The returned handle is the only way to cancel it. Must be called from
    /// within a tokio runtime.
    pub fn get_with<F>(&self, url: Url, completion: F) -> JoinHandle<()>
    where
        F: FnOnce(ServiceCallResult) + Send + 'static,
    {
        let client = self.clone();
        tokio::spawn(async move {
            let result = client.get(&url).await;
            completion(result);
        })
    }
}

impl std::fmt::Debug for HttpGetClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGetClient").finish_non_exhaustive()
    }
}
