/*
[INPUT]:  Error sources (configuration, encoding, transport, API, decoding)
[OUTPUT]: Structured error types carrying upstream context
[POS]:    Error handling layer - unified error type for the entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Maplerad client
#[derive(Error, Debug)]
pub enum MapleradError {
    /// Invalid client setup (empty secret, malformed base URL)
    #[error("configuration error: {0}")]
    Config(String),

    /// Base URL or path composition failed
    #[error("invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Outgoing body could not be serialized to JSON
    #[error("failed to encode request body: {0}")]
    Encoding(#[source] serde_json::Error),

    /// Network-level failure (DNS, connect, timeout, TLS)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server rejected the request with status >= 400
    #[error("API error (status {status}): {message}")]
    Api {
        status: u16,
        message: String,
        /// Raw response body as returned by the server
        body: String,
    },

    /// A success response body that failed to parse into the expected shape
    #[error("failed to decode response: {0}")]
    Decoding(#[source] serde_json::Error),
}

impl MapleradError {
    /// Build an API error from a status code and the raw response body.
    ///
    /// The upstream error schema is `{"status": false, "message": "..."}`;
    /// when the body parses and carries a `message` field that becomes the
    /// error message, otherwise the raw text is used as-is. The body is kept
    /// either way.
    pub fn api_error(status: StatusCode, body: impl Into<String>) -> Self {
        let body = body.into();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
            .unwrap_or_else(|| body.clone());

        MapleradError::Api {
            status: status.as_u16(),
            message,
            body,
        }
    }

    /// Check if the error came from an explicit upstream rejection
    pub fn is_api_error(&self) -> bool {
        matches!(self, MapleradError::Api { .. })
    }

    /// HTTP status of an API rejection, if that is what this error is
    pub fn status(&self) -> Option<u16> {
        match self {
            MapleradError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for Maplerad operations
pub type Result<T> = std::result::Result<T, MapleradError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_extracts_message_field() {
        let err = MapleradError::api_error(
            StatusCode::NOT_FOUND,
            r#"{"status":false,"message":"not found"}"#,
        );
        match err {
            MapleradError::Api { status, message, body } => {
                assert_eq!(status, 404);
                assert_eq!(message, "not found");
                assert!(body.contains("not found"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_api_error_falls_back_to_raw_body() {
        let err = MapleradError::api_error(StatusCode::BAD_GATEWAY, "upstream unavailable");
        match err {
            MapleradError::Api { status, message, body } => {
                assert_eq!(status, 502);
                assert_eq!(message, "upstream unavailable");
                assert_eq!(body, "upstream unavailable");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_status_accessor() {
        let err = MapleradError::api_error(StatusCode::UNAUTHORIZED, "{}");
        assert!(err.is_api_error());
        assert_eq!(err.status(), Some(401));

        let cfg = MapleradError::Config("empty secret".to_string());
        assert_eq!(cfg.status(), None);
    }
}
