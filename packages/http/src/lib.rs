//! # objectlib-http
//!
//! A single-verb HTTP client: GET a URL, get back the body bytes or a
//! `ServiceError`.
//!
//! ## Outcome mapping
//!
//! Each call resolves to exactly one of, in priority order:
//!
//! | Condition | Result |
//! |---|---|
//! | transport error | `ServiceError { message: <transport message>, code: None }` |
//! | response is not HTTP | `ServiceError { message: "Could not parse HTTP response", code: None }` |
//! | status outside `200..=299` | `ServiceError { message: <status reason>, code: Some(status) }` |
//! | empty body | `ServiceError { message: "No Data", code: None }` |
//! | otherwise | `Ok(body)` |
//!
//! Requests carry `Accept: application/json` and time out after 60 seconds.
//! There are no retries.
//!
//! ## Clients
//!
//! ### HttpGetClient
//!
//! ```ignore
//! use objectlib_http::{url_for, HttpGetClient};
//!
//! let client = HttpGetClient::new()?;
//! let url = url_for(&base, &["api", "v2", "pokemon", "pikachu"], [] as [(&str, &str); 0]);
//!
//! let bytes = client.get(&url).await?;
//!
//! // Or hand the result to a callback from a detached task:
//! client.get_with(url, |result| println!("{:?}", result));
//! ```
//!
//! ### BlockingHttpGetClient (feature `blocking`)
//!
//! ```ignore
//! let client = objectlib_http::blocking::BlockingHttpGetClient::new()?;
//! let bytes = client.get(&url)?;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod executor;
pub mod types;
pub mod url_builder;

#[cfg(feature = "blocking")]
pub mod blocking;

pub use client::HttpGetClient;
pub use config::ClientConfig;
pub use error::{Error, ServiceError};
pub use executor::{HttpExecutor, ReqwestExecutor};
pub use types::{map_response, RawResponse, ServiceCallResult};
pub use url_builder::{parse_base, url_for};

pub use bytes::Bytes;
pub use url::Url;
