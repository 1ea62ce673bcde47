//! SDK error types.
//!
//! [`SdkError`] is the single error type returned by every fallible
//! operation in the SDK.

/// Error type for all SDK operations.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    /// Invalid or missing configuration (e.g. bad base URL).
    #[error("configuration error: {0}")]
    Config(String),

    /// The API answered with a non-success status.
    #[error("routes API returned {status}")]
    Status {
        /// HTTP status of the response.
        status: reqwest::StatusCode,
    },

    /// The body was JSON but not shaped like a routes response.
    #[error("unexpected response shape: {0}")]
    Shape(&'static str),

    /// HTTP transport failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The body was not the JSON the API is expected to return.
    #[error("malformed response: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display() {
        let err = SdkError::Status {
            status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
        };
        assert_eq!(err.to_string(), "routes API returned 503 Service Unavailable");
    }

    #[test]
    fn shape_display() {
        let err = SdkError::Shape("`routes` is not an array");
        assert_eq!(err.to_string(), "unexpected response shape: `routes` is not an array");
    }

    #[test]
    fn serialization_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SdkError = json_err.into();
        assert!(err.to_string().starts_with("malformed response:"));
    }
}
