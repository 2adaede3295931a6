//! Error types for tourney-view
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Load failures shown to a user are collapsed into a single generic
//! message by the controller; the variants below carry the detail for logs.

use thiserror::Error;

/// The main error type for tourney-view
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Dataset Errors
    // ============================================================================
    #[error("Unknown dataset type: {name}")]
    UnknownDataset { name: String },

    #[error("No dataset identifier set")]
    MissingIdentifier,

    #[error("Failed to export: {message}")]
    Export { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error("{message}: {source}")]
    Context {
        message: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create an export error
    pub fn export(message: impl Into<String>) -> Self {
        Self::Export {
            message: message.into(),
        }
    }
}

/// Result type alias for tourney-view
pub type Result<T> = std::result::Result<T, Error>;

/// Attach a description of the failed step to an error
pub trait ResultExt<T> {
    /// Wrap the error with `message`
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Wrap the error with a message built only on failure
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.with_context(|| message.into())
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| Error::Context {
            message: f(),
            source: Box::new(e.into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::invalid_value("page_size", "must be one of 25, 50, 100, 250");
        assert_eq!(
            err.to_string(),
            "Invalid config value for 'page_size': must be one of 25, 50, 100, 250"
        );

        let err = Error::http_status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");

        let err = Error::UnknownDataset {
            name: "bogus".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown dataset type: bogus");
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }

    #[test]
    fn test_io_context_keeps_source() {
        use std::error::Error as _;

        let io: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = io.with_context(|| "Failed to write 'x.csv'".to_string()).unwrap_err();

        assert_eq!(err.to_string(), "Failed to write 'x.csv': IO error: denied");
        assert!(err.source().is_some());
        match err {
            Error::Context { source, .. } => assert!(matches!(*source, Error::Io(_))),
            other => panic!("Expected context error, got {other:?}"),
        }
    }
}
