//! Error types for the repository layer

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors that can occur during repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding error
    #[error("Failed to process JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid path provided
    #[error("Invalid path: {path}")]
    InvalidPath { path: PathBuf },

    /// Key cannot be used as a storage slot
    #[error("Invalid key: {key}")]
    InvalidKey { key: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("Repository error: {0}")]
    Other(String),
}

impl From<crate::config::ConfigError> for RepositoryError {
    fn from(err: crate::config::ConfigError) -> Self {
        RepositoryError::Config(err.to_string())
    }
}
