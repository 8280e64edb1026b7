//! Error types for the CarsXE client
//!
//! This module defines the error taxonomy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for the CarsXE client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Validation Errors
    // ============================================================================
    /// A required parameter is absent or blank
    #[error("Missing required parameter: {name}")]
    MissingParameter {
        /// Name of the first missing parameter
        name: String,
    },

    // ============================================================================
    // Request Errors
    // ============================================================================
    /// Base URL and path did not form a well-formed URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    /// The request failed at the transport level, including on timeout
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Raw response body, never parsed as JSON
        body: String,
    },

    // ============================================================================
    // Response Errors
    // ============================================================================
    /// A 2xx response body was not valid JSON
    #[error("Failed to parse JSON response: {0}")]
    JsonDecode(#[from] serde_json::Error),
}

impl Error {
    /// Create a missing parameter error
    pub fn missing_param(name: impl Into<String>) -> Self {
        Self::MissingParameter { name: name.into() }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Check if this error was raised before any network I/O
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::MissingParameter { .. } | Error::InvalidUrl(_))
    }
}

/// Result type alias for the CarsXE client
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::missing_param("vin");
        assert_eq!(err.to_string(), "Missing required parameter: vin");

        let err = Error::http_status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");
    }

    #[test]
    fn test_invalid_url_from_parse_error() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::InvalidUrl(_)));
        assert!(err.to_string().starts_with("Invalid URL:"));
    }

    #[test]
    fn test_json_decode_from_serde_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::JsonDecode(_)));
    }

    #[test]
    fn test_is_validation() {
        assert!(Error::missing_param("plate").is_validation());
        assert!(!Error::http_status(500, "").is_validation());
    }
}
