//! Error types for the resource catalog system.

use std::path::PathBuf;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, I18nError>;

/// Errors that can occur in the resource catalog system.
#[derive(Debug, thiserror::Error)]
pub enum I18nError {
    /// A lookup named a resource source no catalog is mounted for.
    #[error("Unknown resource source '{name}'")]
    UnknownSource {
        /// The resource source identifier that was requested.
        name: String,
    },

    /// File I/O error.
    #[error("Failed to read catalog '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog file parsing error.
    #[error("Catalog parse error: {0}")]
    Parse(String),

    /// An entry held something other than a string value.
    #[error("Invalid entry '{key}': catalog entries must be string values")]
    InvalidEntry { key: String },
}

impl I18nError {
    /// Create an unknown-source error.
    pub fn unknown_source(source: impl Into<String>) -> Self {
        Self::UnknownSource {
            name: source.into(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Create an invalid-entry error.
    pub fn invalid_entry(key: impl Into<String>) -> Self {
        Self::InvalidEntry { key: key.into() }
    }
}
