//! Client error types

use ideaforge_core::CoreError;
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// A response could not be persisted
    #[error(transparent)]
    Storage(#[from] CoreError),
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Whether the access token was rejected and the session needs renewing
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::AuthenticationFailed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_mapping() {
        let cases = [
            (400, "BadRequest"),
            (401, "AuthenticationFailed"),
            (403, "Forbidden"),
            (404, "NotFound"),
            (502, "ServerError"),
        ];
        for (code, expected) in cases {
            let status = reqwest::StatusCode::from_u16(code).unwrap();
            let error = ClientError::from_status(status, "message".to_string());
            assert!(
                format!("{error:?}").starts_with(expected),
                "{code} mapped to {error:?}"
            );
        }
    }

    #[test]
    fn test_only_unauthorized_is_auth_expired() {
        let unauthorized = ClientError::from_status(reqwest::StatusCode::UNAUTHORIZED, String::new());
        let forbidden = ClientError::from_status(reqwest::StatusCode::FORBIDDEN, String::new());
        assert!(unauthorized.is_auth_expired());
        assert!(!forbidden.is_auth_expired());
    }
}
