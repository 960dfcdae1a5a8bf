//! Opens the storage backend described by a [`RepositoryConfig`]

use crate::config::{RepositoryConfig, RepositorySource};
use crate::error::{RepositoryError, RepositoryResult};
use crate::{FileSystemRepository, MemoryRepository, Repository};
use std::sync::Arc;

/// Repository loader
///
/// # Example
///
/// ```rust,ignore
/// use rankscope_repository::{RepositoryConfig, RepositoryLoader};
///
/// let config = RepositoryConfig::file_system("data/history");
/// let repository = RepositoryLoader::new(config).open().await?;
/// ```
pub struct RepositoryLoader {
    config: RepositoryConfig,
}

impl RepositoryLoader {
    /// Create a new repository loader
    pub fn new(config: RepositoryConfig) -> Self {
        Self { config }
    }

    /// Validate the configuration and open the backend
    ///
    /// A file system root that does not exist yet is created.
    pub async fn open(&self) -> RepositoryResult<Arc<dyn Repository>> {
        self.config.validate()?;

        match self.config.source {
            RepositorySource::FileSystem => {
                let base_path = self.config.base_path.as_ref().ok_or_else(|| {
                    RepositoryError::Config("base_path required for FileSystem source".to_string())
                })?;
                let repo = FileSystemRepository::create(base_path).await?;
                tracing::info!("Opened file system repository at {}", repo.root_path().display());
                Ok(Arc::new(repo))
            }
            RepositorySource::Memory => {
                tracing::debug!("Opened in-memory repository");
                Ok(Arc::new(MemoryRepository::new()))
            }
        }
    }
}
