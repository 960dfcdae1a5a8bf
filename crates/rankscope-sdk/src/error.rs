//! SDK error types

use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Malformed or out-of-range request; re-prompt the user
    #[error("Validation error: {0}")]
    Validation(String),

    /// History index does not exist; refresh the history view
    #[error("History entry {index} not found (history has {len} entries)")]
    NotFound { index: usize, len: usize },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] rankscope_core::CoreError),

    /// Storage error
    #[error("Repository error: {0}")]
    Repository(#[from] rankscope_repository::RepositoryError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl SdkError {
    /// Whether the caller can recover by re-prompting or refreshing
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SdkError::Validation(_) | SdkError::NotFound { .. })
    }
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
