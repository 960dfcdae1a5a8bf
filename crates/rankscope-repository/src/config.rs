//! Repository configuration types
//!
//! This module provides configuration types for the supported storage
//! backends (file system, memory).

use serde::{Deserialize, Serialize};

/// Repository source type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepositorySource {
    /// Persist to JSON files under a base directory
    FileSystem,
    /// Keep everything in memory (tests, previews, embedded use)
    #[default]
    Memory,
}

/// Repository configuration
///
/// # Examples
///
/// ```rust
/// use rankscope_repository::RepositoryConfig;
///
/// // File system repository
/// let config = RepositoryConfig::file_system("data/history");
///
/// // Memory repository (for testing)
/// let config = RepositoryConfig::memory();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Configuration source type
    #[serde(default)]
    pub source: RepositorySource,

    /// File system base path (required for FileSystem source)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,
}

impl RepositoryConfig {
    /// Create a file system repository configuration
    pub fn file_system(path: impl Into<String>) -> Self {
        Self {
            source: RepositorySource::FileSystem,
            base_path: Some(path.into()),
        }
    }

    /// Create a memory repository configuration
    pub fn memory() -> Self {
        Self {
            source: RepositorySource::Memory,
            base_path: None,
        }
    }

    /// Validate the configuration
    ///
    /// Returns an error if required fields are missing for the selected source.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.source {
            RepositorySource::FileSystem => match self.base_path.as_deref() {
                Some(path) if !path.trim().is_empty() => Ok(()),
                _ => Err(ConfigError::MissingField {
                    source: "FileSystem".to_string(),
                    field: "base_path".to_string(),
                }),
            },
            RepositorySource::Memory => Ok(()),
        }
    }
}

/// Configuration error
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A required field is missing for the selected source
    MissingField { source: String, field: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingField { source, field } => {
                write!(f, "{} source requires {} to be set", source, field)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
