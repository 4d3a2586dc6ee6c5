use bytes::Bytes;

use crate::error::ServiceError;

/// Outcome of a GET: the response body, or why there is none.
pub type ServiceCallResult = Result<Bytes, ServiceError>;

/// What a transport hands back before any interpretation.
///
/// `status` is `None` when the transport produced something that is not an
/// HTTP response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawResponse {
    pub status: Option<u16>,
    pub body: Bytes,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status: Some(status),
            body: body.into(),
        }
    }

    /// A response that could not be read as HTTP.
    pub fn unparseable(body: impl Into<Bytes>) -> Self {
        Self {
            status: None,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status
            .is_some_and(|status| (200..=299).contains(&status))
    }
}

/// Maps a transport outcome to a service result.
///
/// Checks run in a fixed order and the first match wins:
///
/// 1. transport failure: its message, no code
/// 2. no HTTP status: "Could not parse HTTP response", no code
/// 3. status outside `200..=299`: the status reason, with the code
/// 4. empty body: "No Data", no code
/// 5. otherwise the body
pub fn map_response(outcome: Result<RawResponse, String>) -> ServiceCallResult {
    let response = outcome.map_err(ServiceError::transport)?;

    let Some(status) = response.status else {
        return Err(ServiceError::unparseable_response());
    };

    if !response.is_success() {
        return Err(ServiceError::status(status));
    }

    if response.body.is_empty() {
        return Err(ServiceError::no_data());
    }

    Ok(response.body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_wins() {
        let result = map_response(Err("The Internet connection appears to be offline.".into()));
        assert_eq!(
            result,
            Err(ServiceError::new(
                "The Internet connection appears to be offline.",
                None
            ))
        );
    }

    #[test]
    fn missing_status_is_unparseable_even_with_body() {
        let result = map_response(Ok(RawResponse::unparseable("{}")));
        assert_eq!(result, Err(ServiceError::unparseable_response()));
    }

    #[test]
    fn bad_status_beats_empty_body() {
        let result = map_response(Ok(RawResponse::new(500, Bytes::new())));
        let error = result.unwrap_err();
        assert_eq!(error.code, Some(500));
        assert_eq!(error.message, "internal server error");
    }

    #[test]
    fn status_range_edges() {
        assert_eq!(map_response(Ok(RawResponse::new(199, "x"))).unwrap_err().code, Some(199));
        assert!(map_response(Ok(RawResponse::new(200, "x"))).is_ok());
        assert!(map_response(Ok(RawResponse::new(299, "x"))).is_ok());
        assert_eq!(map_response(Ok(RawResponse::new(300, "x"))).unwrap_err().code, Some(300));
    }

    #[test]
    fn empty_success_is_no_data() {
        let result = map_response(Ok(RawResponse::new(204, Bytes::new())));
        assert_eq!(result, Err(ServiceError::no_data()));
    }

    #[test]
    fn success_returns_exact_body() {
        let body = Bytes::from_static(b"{\"results\":[]}");
        let result = map_response(Ok(RawResponse::new(200, body.clone())));
        assert_eq!(result, Ok(body));
    }
}
