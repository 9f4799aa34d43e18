//! Error types for Horizon Startpage.
//!
//! Widget operations are total and never fail. Errors only arise at the
//! configuration boundary.

use std::path::PathBuf;

/// Result type alias for start page operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error.
    #[error("Failed to read configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error.
    #[error("Configuration parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("Configuration serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A URL in the configuration could not be parsed.
    #[error("Invalid URL '{url}' for '{field}': {source}")]
    InvalidUrl {
        field: String,
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Invalid configuration value.
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a URL error.
    pub fn invalid_url(
        field: impl Into<String>,
        url: impl Into<String>,
        source: url::ParseError,
    ) -> Self {
        Self::InvalidUrl {
            field: field.into(),
            url: url.into(),
            source,
        }
    }

    /// Create a value error.
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}
