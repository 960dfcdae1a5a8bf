//! File system based repository implementation

use async_trait::async_trait;
use path_absolutize::Absolutize;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::{error::RepositoryError, traits::Repository, RepositoryResult};

/// File system based repository
///
/// Stores each key as `<root>/<key>.json`. Writes go to a uniquely named
/// temporary file in the root first and are renamed into place, so a reader
/// never sees a half-written payload and concurrent writers, even from other
/// processes, never share a temp file.
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    /// Root path of the repository
    root_path: PathBuf,
}

impl FileSystemRepository {
    /// Open a repository rooted at an existing directory
    ///
    /// # Example
    /// ```no_run
    /// use rankscope_repository::FileSystemRepository;
    ///
    /// let repo = FileSystemRepository::new("data").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(root_path: P) -> RepositoryResult<Self> {
        let path = root_path.as_ref();

        if !path.is_dir() {
            return Err(RepositoryError::InvalidPath {
                path: path.to_path_buf(),
            });
        }

        let abs_path = path
            .absolutize()
            .map_err(|e| RepositoryError::Other(format!("Failed to absolutize path: {}", e)))?
            .to_path_buf();

        Ok(Self {
            root_path: abs_path,
        })
    }

    /// Create the root directory if needed, then open it
    pub async fn create<P: AsRef<Path>>(root_path: P) -> RepositoryResult<Self> {
        fs::create_dir_all(root_path.as_ref()).await?;
        Self::new(root_path)
    }

    /// Root directory of this repository
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Resolve the file backing `key`
    fn resolve_path(&self, key: &str) -> RepositoryResult<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));

        if !valid {
            return Err(RepositoryError::InvalidKey {
                key: key.to_string(),
            });
        }

        Ok(self.root_path.join(format!("{}.json", key)))
    }
}

/// Write `bytes` to a uniquely named temp file in `root`, then rename it onto `target`
///
/// Temp names start with `.`, which no valid key does.
fn write_atomically(root: &Path, target: &Path, bytes: &[u8]) -> RepositoryResult<()> {
    let mut tmp = tempfile::Builder::new()
        .prefix(".rankscope-")
        .suffix(".tmp")
        .tempfile_in(root)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(target).map_err(|e| RepositoryError::Io(e.error))?;
    Ok(())
}

#[async_trait]
impl Repository for FileSystemRepository {
    async fn get(&self, key: &str) -> RepositoryResult<Option<String>> {
        let path = self.resolve_path(key)?;

        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, payload: String) -> RepositoryResult<()> {
        let path = self.resolve_path(key)?;
        let len = payload.len();

        let root = self.root_path.clone();
        let target = path.clone();
        tokio::task::spawn_blocking(move || write_atomically(&root, &target, payload.as_bytes()))
            .await
            .map_err(|e| RepositoryError::Other(format!("Write task failed: {}", e)))??;

        tracing::debug!("Wrote {} bytes to {}", len, path.display());
        Ok(())
    }

    async fn remove(&self, key: &str) -> RepositoryResult<()> {
        let path = self.resolve_path(key)?;

        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_root_rejected() {
        let result = FileSystemRepository::new("/definitely/not/a/real/rankscope/dir");
        assert!(matches!(result, Err(RepositoryError::InvalidPath { .. })));
    }

    #[test]
    fn test_resolve_path_rejects_traversal() {
        let dir = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(dir.path()).unwrap();

        for key in ["", "../escape", ".hidden", "a/b", "a\\b", "name with space"] {
            assert!(
                matches!(repo.resolve_path(key), Err(RepositoryError::InvalidKey { .. })),
                "key {:?} should be rejected",
                key
            );
        }

        let path = repo.resolve_path("rankscope.history").unwrap();
        assert!(path.ends_with("rankscope.history.json"));
    }

    #[tokio::test]
    async fn test_create_makes_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("state").join("history");

        let repo = FileSystemRepository::create(&nested).await.unwrap();
        assert!(nested.is_dir());
        assert!(repo.root_path().is_absolute());
    }
}
