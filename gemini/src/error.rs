//! Error types for the Gemini API client.

use thiserror::Error;

/// Common error statuses from the Generative Language API.
pub mod status {
    /// Authentication errors
    pub const UNAUTHENTICATED: &str = "UNAUTHENTICATED";
    pub const PERMISSION_DENIED: &str = "PERMISSION_DENIED";

    /// Rate limiting
    pub const RESOURCE_EXHAUSTED: &str = "RESOURCE_EXHAUSTED";

    /// Request errors
    pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
    pub const NOT_FOUND: &str = "NOT_FOUND";

    /// Server errors
    pub const INTERNAL: &str = "INTERNAL";
    pub const UNAVAILABLE: &str = "UNAVAILABLE";
}

/// Result type alias for Gemini operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for Gemini API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// API error returned by the service.
    #[error("gemini: {code} - {message} (http_status={http_status})")]
    Api {
        code: String,
        message: String,
        http_status: u16,
    },

    /// HTTP request error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Creates a new API error.
    pub fn api(code: impl Into<String>, message: impl Into<String>, http_status: u16) -> Self {
        Error::Api {
            code: code.into(),
            message: message.into(),
            http_status,
        }
    }

    /// Returns true if this is a rate limit error.
    pub fn is_rate_limit(&self) -> bool {
        match self {
            Error::Api { code, http_status, .. } => {
                code == status::RESOURCE_EXHAUSTED || *http_status == 429
            }
            _ => false,
        }
    }

    /// Returns true if this is an authentication error.
    pub fn is_auth(&self) -> bool {
        match self {
            Error::Api { code, http_status, .. } => {
                code == status::UNAUTHENTICATED
                    || code == status::PERMISSION_DENIED
                    || *http_status == 401
                    || *http_status == 403
            }
            _ => false,
        }
    }

    /// Returns true if this is a server-side error.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { code, http_status, .. } => {
                code == status::INTERNAL || code == status::UNAVAILABLE || *http_status >= 500
            }
            _ => false,
        }
    }

    /// Returns true if the request can be retried.
    pub fn is_retryable(&self) -> bool {
        self.is_rate_limit() || self.is_server_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        let err = Error::api(status::RESOURCE_EXHAUSTED, "quota exceeded", 429);
        assert!(err.is_rate_limit());
        assert!(!err.is_auth());
        assert!(err.is_retryable());

        let err = Error::api(status::UNAUTHENTICATED, "bad key", 401);
        assert!(err.is_auth());
        assert!(!err.is_retryable());

        let err = Error::api(status::UNAVAILABLE, "overloaded", 503);
        assert!(err.is_server_error());
        assert!(err.is_retryable());

        let err = Error::api(status::INVALID_ARGUMENT, "bad request", 400);
        assert!(!err.is_retryable());

        let err = Error::Config("api_key must be non-empty".to_string());
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_display() {
        let err = Error::api(status::NOT_FOUND, "model not found", 404);
        assert_eq!(
            err.to_string(),
            "gemini: NOT_FOUND - model not found (http_status=404)"
        );
    }
}
