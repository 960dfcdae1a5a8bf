//! Builder pattern for EstimationEngine

use crate::config::EngineConfig;
use crate::engine::EstimationEngine;
use crate::error::{Result, SdkError};
use crate::estimator::Estimator;
use crate::history::HistoryStore;
use rankscope_core::{BracketTable, MAX_MARKS};
use rankscope_repository::{HistorySlot, Repository, RepositoryConfig, RepositoryLoader};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Builder for EstimationEngine
///
/// # Example
///
/// ```rust,ignore
/// use rankscope_sdk::{EstimationEngineBuilder, RepositoryConfig};
///
/// // Persist history to disk, custom bracket table
/// let engine = EstimationEngineBuilder::new()
///     .with_bracket_file("data/brackets.yaml")
///     .with_repository(RepositoryConfig::file_system("data/history"))
///     .build()
///     .await?;
///
/// // Everything in memory (tests, previews)
/// let engine = EstimationEngineBuilder::new().build().await?;
/// ```
pub struct EstimationEngineBuilder {
    config: EngineConfig,
    table: Option<BracketTable>,
    storage: Option<Arc<dyn Repository>>,
}

impl EstimationEngineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::from_config(EngineConfig::new())
    }

    /// Start from an existing configuration
    pub fn from_config(config: EngineConfig) -> Self {
        Self {
            config,
            table: None,
            storage: None,
        }
    }

    /// Use an in-memory bracket table; takes precedence over any bracket file
    pub fn with_bracket_table(mut self, table: BracketTable) -> Self {
        self.table = Some(table);
        self
    }

    /// Load the bracket table from a YAML or JSON file at build time
    pub fn with_bracket_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.bracket_file = Some(path.into());
        self
    }

    /// Set the candidate pool size
    pub fn with_pool_size(mut self, pool_size: u64) -> Self {
        self.config.pool_size = pool_size;
        self
    }

    /// Set the history capacity
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.config.history_capacity = capacity;
        self
    }

    /// Set the history storage key
    pub fn with_history_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.config.history_namespace = namespace.into();
        self
    }

    /// Set repository configuration for history persistence
    pub fn with_repository(mut self, config: RepositoryConfig) -> Self {
        self.config.repository = config;
        self
    }

    /// Use an already opened storage backend; takes precedence over the repository config
    pub fn with_storage(mut self, storage: Arc<dyn Repository>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Build the estimation engine
    ///
    /// Fails when the configuration is invalid, the bracket table cannot be
    /// loaded, or the table leaves part of the marks domain uncovered.
    pub async fn build(self) -> Result<EstimationEngine> {
        self.config.validate()?;

        let table = match (self.table, &self.config.bracket_file) {
            (Some(table), _) => table,
            (None, Some(path)) => load_bracket_file(path).await?,
            (None, None) => BracketTable::default(),
        };

        let gaps = table.gaps(0.0, MAX_MARKS);
        if !gaps.is_empty() || !table.covers(0.0, MAX_MARKS) {
            let described: Vec<String> = gaps
                .iter()
                .map(|gap| format!("({}, {})", gap.from, gap.to))
                .collect();
            return Err(SdkError::Config(format!(
                "bracket table does not cover marks [0, {}]; uncovered: {}",
                MAX_MARKS,
                described.join(", ")
            )));
        }

        let storage = match self.storage {
            Some(storage) => storage,
            None => RepositoryLoader::new(self.config.repository.clone()).open().await?,
        };

        let slot = HistorySlot::new(storage, self.config.history_namespace.clone());
        let history = HistoryStore::open(slot, self.config.history_capacity).await?;

        let estimator = Estimator::new(table).with_default_pool_size(self.config.pool_size);

        tracing::info!(
            brackets = estimator.table().len(),
            pool_size = self.config.pool_size,
            history_capacity = self.config.history_capacity,
            "Estimation engine ready"
        );

        Ok(EstimationEngine::new(estimator, history, self.config))
    }
}

impl Default for EstimationEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a bracket table document, YAML for `.yaml`/`.yml`, JSON otherwise
async fn load_bracket_file(path: &Path) -> Result<BracketTable> {
    let content = tokio::fs::read_to_string(path).await?;

    let is_yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    );

    let table = if is_yaml {
        serde_yaml::from_str(&content)?
    } else {
        BracketTable::from_json_str(&content)?
    };

    tracing::debug!("Loaded bracket table from {}", path.display());
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rankscope_core::BracketEntry;

    #[tokio::test]
    async fn test_builder_defaults() {
        let engine = EstimationEngineBuilder::new().build().await.unwrap();

        assert_eq!(engine.config().pool_size, 1_475_103);
        assert_eq!(engine.history().capacity(), 5);
        assert_eq!(engine.estimator().table(), &BracketTable::default());
    }

    #[tokio::test]
    async fn test_builder_with_multiple_options() {
        let builder = EstimationEngineBuilder::new()
            .with_pool_size(1_000_000)
            .with_history_capacity(3)
            .with_history_namespace("candidate.history");

        assert_eq!(builder.config.pool_size, 1_000_000);
        assert_eq!(builder.config.history_capacity, 3);
        assert_eq!(builder.config.history_namespace, "candidate.history");

        let engine = builder.build().await.unwrap();
        assert_eq!(engine.estimator().default_pool_size(), 1_000_000);
    }

    #[tokio::test]
    async fn test_builder_rejects_gappy_table() {
        let table = BracketTable::new(vec![
            BracketEntry::new(0.0, 100.0, 0.0, 90.0),
            BracketEntry::new(150.0, 300.0, 95.0, 100.0),
        ])
        .unwrap();

        let err = EstimationEngineBuilder::new()
            .with_bracket_table(table)
            .build()
            .await
            .unwrap_err();

        assert!(matches!(err, SdkError::Config(_)));
        assert!(err.to_string().contains("(100, 150)"));
    }

    #[tokio::test]
    async fn test_builder_rejects_zero_pool() {
        let result = EstimationEngineBuilder::new().with_pool_size(0).build().await;
        assert!(matches!(result, Err(SdkError::Config(_))));
    }

    #[tokio::test]
    async fn test_missing_bracket_file() {
        let result = EstimationEngineBuilder::new()
            .with_bracket_file("/no/such/brackets.yaml")
            .build()
            .await;
        assert!(matches!(result, Err(SdkError::Io(_))));
    }
}
