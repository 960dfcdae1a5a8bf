//! Configuration types for EstimationEngine

use crate::error::{Result, SdkError};
use rankscope_core::{DEFAULT_HISTORY_NAMESPACE, DEFAULT_POOL_SIZE, HISTORY_CAPACITY};
use rankscope_repository::RepositoryConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Total candidate count used to derive ranks
    pub pool_size: u64,

    /// Maximum number of history entries kept
    pub history_capacity: usize,

    /// Storage key for the history payload
    pub history_namespace: String,

    /// Optional bracket table file (YAML or JSON); the built-in table is used when unset
    pub bracket_file: Option<PathBuf>,

    /// Where the history is persisted
    pub repository: RepositoryConfig,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            pool_size: DEFAULT_POOL_SIZE,
            history_capacity: HISTORY_CAPACITY,
            history_namespace: DEFAULT_HISTORY_NAMESPACE.to_string(),
            bracket_file: None,
            repository: RepositoryConfig::memory(),
        }
    }

    /// Load configuration from environment variables and config file
    ///
    /// Sources, later ones overriding earlier ones:
    /// - `.env` (if present)
    /// - `config/rankscope.{toml,yaml,json}` (optional)
    /// - `RANKSCOPE_*` environment variables, e.g. `RANKSCOPE_POOL_SIZE`
    ///
    /// Missing sources leave the defaults in place; a file that exists but
    /// does not parse is an error.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::load_named("config/rankscope")
    }

    /// Same as [`EngineConfig::load`] without `.env`, reading the optional
    /// file `<base>.{toml,yaml,json}`
    pub fn load_named(base: &str) -> anyhow::Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name(base).required(false))
            .add_source(config::Environment::with_prefix("RANKSCOPE"))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", base, e))?;

        let config: Self = cfg
            .try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e))?;

        tracing::debug!(
            base,
            pool_size = config.pool_size,
            history_capacity = config.history_capacity,
            "Loaded engine configuration"
        );
        Ok(config)
    }

    /// Load configuration from one explicit file
    pub fn load_from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.as_ref().display(), e))?;

        cfg.try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e))
    }

    /// Set the candidate pool size
    pub fn with_pool_size(mut self, pool_size: u64) -> Self {
        self.pool_size = pool_size;
        self
    }

    /// Set the history capacity
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Set the history storage key
    pub fn with_history_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.history_namespace = namespace.into();
        self
    }

    /// Set bracket table file
    pub fn with_bracket_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.bracket_file = Some(path.into());
        self
    }

    /// Set repository configuration
    pub fn with_repository(mut self, repository: RepositoryConfig) -> Self {
        self.repository = repository;
        self
    }

    /// Check the values the engine cannot run without
    pub fn validate(&self) -> Result<()> {
        if self.pool_size == 0 {
            return Err(SdkError::Config("pool_size must be positive".to_string()));
        }
        if self.history_capacity == 0 {
            return Err(SdkError::Config(
                "history_capacity must be positive".to_string(),
            ));
        }
        if self.history_namespace.trim().is_empty() {
            return Err(SdkError::Config(
                "history_namespace must not be empty".to_string(),
            ));
        }
        self.repository
            .validate()
            .map_err(|e| SdkError::Config(e.to_string()))
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
