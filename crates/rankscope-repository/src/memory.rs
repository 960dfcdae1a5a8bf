//! In-memory repository
//!
//! Simple memory-based storage for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::{traits::Repository, RepositoryResult};

/// In-memory repository
///
/// Payloads are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    /// Map of key -> payload
    slots: RwLock<HashMap<String, String>>,
}

impl MemoryRepository {
    /// Create an empty memory repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-seeded with one payload
    pub fn with_entry(key: impl Into<String>, payload: impl Into<String>) -> Self {
        let mut slots = HashMap::new();
        slots.insert(key.into(), payload.into());
        Self {
            slots: RwLock::new(slots),
        }
    }

    /// Number of stored keys
    pub async fn len(&self) -> usize {
        self.slots.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.slots.read().await.is_empty()
    }
}

#[async_trait]
impl Repository for MemoryRepository {
    async fn get(&self, key: &str) -> RepositoryResult<Option<String>> {
        Ok(self.slots.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, payload: String) -> RepositoryResult<()> {
        self.slots.write().await.insert(key.to_string(), payload);
        Ok(())
    }

    async fn remove(&self, key: &str) -> RepositoryResult<()> {
        self.slots.write().await.remove(key);
        Ok(())
    }
}
