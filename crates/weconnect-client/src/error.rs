//! Error types for WeConnect client operations

use thiserror::Error;

/// Result type alias for WeConnect client operations
pub type Result<T> = std::result::Result<T, WeConnectError>;

/// Errors that can occur during WeConnect client operations
#[derive(Error, Debug)]
pub enum WeConnectError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Server returned an error response
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl WeConnectError {
    /// Create a server error from status code and message
    pub fn server_error(status: u16, message: impl Into<String>) -> Self {
        Self::ServerError {
            status,
            message: message.into(),
        }
    }

    /// Whether this error originated in the transport layer
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::HttpError(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_display() {
        let err = WeConnectError::server_error(503, "backend unavailable");
        assert_eq!(err.to_string(), "Server error 503: backend unavailable");
    }

    #[test]
    fn test_invalid_url_conversion() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let err: WeConnectError = parse_err.into();
        assert!(matches!(err, WeConnectError::InvalidUrl(_)));
        assert!(!err.is_transport());
    }
}
