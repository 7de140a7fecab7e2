//! Transport error taxonomy shared by every remote port.
//!
//! Errors carry the original response body when available; operator
//! facing messages are extracted from the backend's `error` /
//! `non_field_errors` envelopes. No error is retried automatically -
//! all recovery is operator-initiated.

use thiserror::Error;

use crate::domain::foundation::ValidationError;

/// Failure of a request to the analytics backend.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, timeout).
    #[error("Network failure: {0}")]
    Network(String),

    /// The backend answered 401; the session has been invalidated
    /// globally, and this rejection is still surfaced to the caller.
    #[error("Session expired or unauthorized")]
    Unauthorized { body: Option<String> },

    /// Any other non-2xx response.
    #[error("Request failed with status {status}")]
    Status { status: u16, body: Option<String> },

    /// A 2xx response whose payload did not match the expected shape.
    #[error("Malformed payload: {0}")]
    Decode(String),
}

impl ApiError {
    /// The raw response body, when one was captured.
    pub fn body(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { body } | ApiError::Status { body, .. } => body.as_deref(),
            _ => None,
        }
    }

    /// True for a 401 rejection.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// Extracts the backend's operator-facing message from the body:
    /// the `error` field, or the first `non_field_errors` entry.
    pub fn server_message(&self) -> Option<String> {
        let body = self.body()?;
        let value: serde_json::Value = serde_json::from_str(body).ok()?;

        if let Some(message) = value.get("error").and_then(|v| v.as_str()) {
            return Some(message.to_string());
        }
        value
            .get("non_field_errors")
            .and_then(|v| v.as_array())
            .and_then(|errors| errors.first())
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
    }
}

impl From<ValidationError> for ApiError {
    /// A boundary decode rejection (e.g. unexpected churn nesting).
    fn from(err: ValidationError) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_reads_error_field() {
        let err = ApiError::Status {
            status: 400,
            body: Some(r#"{"error": "Plan does not exist"}"#.to_string()),
        };
        assert_eq!(err.server_message().as_deref(), Some("Plan does not exist"));
    }

    #[test]
    fn server_message_reads_first_non_field_error() {
        let err = ApiError::Status {
            status: 400,
            body: Some(
                r#"{"non_field_errors": ["Unable to log in with provided credentials."]}"#
                    .to_string(),
            ),
        };
        assert_eq!(
            err.server_message().as_deref(),
            Some("Unable to log in with provided credentials.")
        );
    }

    #[test]
    fn server_message_is_none_for_opaque_bodies() {
        let err = ApiError::Status {
            status: 500,
            body: Some("<html>Internal Server Error</html>".to_string()),
        };
        assert!(err.server_message().is_none());

        let err = ApiError::Network("connection refused".to_string());
        assert!(err.server_message().is_none());
    }

    #[test]
    fn unauthorized_is_detectable() {
        assert!(ApiError::Unauthorized { body: None }.is_unauthorized());
        assert!(!ApiError::Network("x".into()).is_unauthorized());
    }
}
