//! Storage trait definition
//!
//! The engine needs a durable key-value slot and nothing more: one payload
//! string per namespace key. Backends decide where the bytes live.
//!
//! # Example
//!
//! ```no_run
//! use rankscope_repository::{FileSystemRepository, Repository};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let repo = FileSystemRepository::new("data")?;
//!
//! repo.set("rankscope.history", "[]".to_string()).await?;
//! let payload = repo.get("rankscope.history").await?;
//! assert_eq!(payload.as_deref(), Some("[]"));
//!
//! repo.remove("rankscope.history").await?;
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;

use crate::RepositoryResult;

/// Durable key-value storage
///
/// # Implementation Notes
///
/// - `get` returns `Ok(None)` for a key that was never written or was removed
/// - `set` replaces the whole payload
/// - `remove` on a missing key is not an error
///
/// All implementations must be `Send + Sync` for use across async tasks.
#[async_trait]
pub trait Repository: Send + Sync {
    /// Read the payload stored under `key`
    async fn get(&self, key: &str) -> RepositoryResult<Option<String>>;

    /// Store `payload` under `key`, replacing any previous value
    async fn set(&self, key: &str, payload: String) -> RepositoryResult<()>;

    /// Delete whatever is stored under `key`
    async fn remove(&self, key: &str) -> RepositoryResult<()>;

    /// Check if anything is stored under `key`
    async fn exists(&self, key: &str) -> RepositoryResult<bool> {
        Ok(self.get(key).await?.is_some())
    }
}
