use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::{Deserialize, Serialize};

use crate::error::Error;

fn default_timeout_ms() -> u64 {
    60_000
}

fn default_accept() -> String {
    "application/json".to_string()
}

/// Settings applied to every request a client issues.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// Whole-request timeout, in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Value of the `Accept` header.
    #[serde(default = "default_accept")]
    pub accept: String,
}

impl ClientConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Sets the request timeout. Precision below a millisecond is dropped,
    /// but a non-zero timeout never rounds down to zero.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        let millis = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self.timeout_ms = if millis == 0 && !timeout.is_zero() {
            1
        } else {
            millis
        };
        self
    }

    /// Headers every request carries.
    pub(crate) fn default_headers(&self) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_str(&self.accept)?);
        Ok(headers)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            accept: default_accept(),
        }
    }
}
