//! History payload codec
//!
//! [`HistorySlot`] binds a [`Repository`] to one namespace key and converts
//! between the stored JSON array and [`HistoryEntry`] values.
//!
//! Reads fail open: a missing, unreadable or malformed payload loads as an
//! empty history so the calculator stays usable. Writes propagate errors.

use rankscope_core::HistoryEntry;
use std::sync::Arc;

use crate::{Repository, RepositoryResult};

/// One namespaced history slot in a repository
#[derive(Clone)]
pub struct HistorySlot {
    repository: Arc<dyn Repository>,
    namespace: String,
}

impl HistorySlot {
    pub fn new(repository: Arc<dyn Repository>, namespace: impl Into<String>) -> Self {
        Self {
            repository,
            namespace: namespace.into(),
        }
    }

    /// Storage key for this slot
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Load the stored history, newest first
    pub async fn load(&self) -> Vec<HistoryEntry> {
        let payload = match self.repository.get(&self.namespace).await {
            Ok(Some(payload)) => payload,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(
                    namespace = %self.namespace,
                    "Failed to read history, starting empty: {}",
                    e
                );
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<HistoryEntry>>(&payload) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(
                    namespace = %self.namespace,
                    "Discarding malformed history payload: {}",
                    e
                );
                Vec::new()
            }
        }
    }

    /// Replace the stored history; an empty history removes the key
    pub async fn save(&self, entries: &[HistoryEntry]) -> RepositoryResult<()> {
        if entries.is_empty() {
            return self.repository.remove(&self.namespace).await;
        }

        let payload = serde_json::to_string(entries)?;
        self.repository.set(&self.namespace, payload).await
    }
}

impl std::fmt::Debug for HistorySlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistorySlot")
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}
