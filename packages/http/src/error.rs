/// Message for a response that carries no HTTP status.
pub const COULD_NOT_PARSE_HTTP_RESPONSE: &str = "Could not parse HTTP response";

/// Message for a successful status with an empty body.
pub const NO_DATA: &str = "No Data";

/// A failed service call.
///
/// `code` is the HTTP status when the server answered with one outside
/// `200..=299`; every other failure leaves it empty.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ServiceError {
    pub message: String,
    pub code: Option<u16>,
}

impl ServiceError {
    pub fn new(message: impl Into<String>, code: Option<u16>) -> Self {
        Self {
            message: message.into(),
            code,
        }
    }

    /// The transport failed before any response arrived.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(message, None)
    }

    pub fn unparseable_response() -> Self {
        Self::new(COULD_NOT_PARSE_HTTP_RESPONSE, None)
    }

    /// The server answered with a non-success status.
    pub fn status(code: u16) -> Self {
        Self::new(status_reason(code), Some(code))
    }

    pub fn no_data() -> Self {
        Self::new(NO_DATA, None)
    }
}

/// Lowercase reason phrase for a status code, falling back to its class for
/// codes without a registered phrase.
pub fn status_reason(code: u16) -> String {
    let canonical = http::StatusCode::from_u16(code)
        .ok()
        .and_then(|status| status.canonical_reason());

    match canonical {
        Some(reason) => reason.to_lowercase(),
        None => match code {
            100..=199 => "informational",
            200..=299 => "success",
            300..=399 => "redirected",
            400..=499 => "client error",
            500..=599 => "server error",
            _ => "server returned an unknown status code",
        }
        .to_string(),
    }
}

/// Failures building a client or a URL.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),
}
