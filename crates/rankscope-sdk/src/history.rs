//! Bounded calculation history
//!
//! Entries are kept newest-first. Every mutation runs under one lock:
//! the next state is built, saved through the [`HistorySlot`], and only then
//! committed, so readers never observe a partially evicted list and a failed
//! save leaves the store as it was.

use crate::error::{Result, SdkError};
use rankscope_core::{EstimationResult, HistoryEntry};
use rankscope_repository::{HistorySlot, MemoryRepository};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Calculation history store
#[derive(Debug)]
pub struct HistoryStore {
    entries: Mutex<Vec<HistoryEntry>>,
    capacity: usize,
    slot: HistorySlot,
}

impl HistoryStore {
    /// Open a store over `slot`, loading whatever it already holds
    ///
    /// A stored list longer than `capacity` is cut down to the newest
    /// `capacity` entries.
    pub async fn open(slot: HistorySlot, capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(SdkError::Config(
                "history capacity must be positive".to_string(),
            ));
        }

        let mut entries = slot.load().await;
        if entries.len() > capacity {
            tracing::debug!(
                stored = entries.len(),
                capacity,
                "Truncating stored history to capacity"
            );
            entries.truncate(capacity);
        }

        tracing::debug!(
            namespace = slot.namespace(),
            loaded = entries.len(),
            "Opened history store"
        );

        Ok(Self {
            entries: Mutex::new(entries),
            capacity,
            slot,
        })
    }

    /// Empty store backed by a fresh in-memory repository
    pub async fn in_memory(capacity: usize) -> Result<Self> {
        let slot = HistorySlot::new(
            Arc::new(MemoryRepository::new()),
            rankscope_core::DEFAULT_HISTORY_NAMESPACE,
        );
        Self::open(slot, capacity).await
    }

    /// Maximum number of entries kept
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Insert `entry` as the newest, evicting the oldest beyond capacity
    pub async fn append(&self, entry: HistoryEntry) -> Result<()> {
        let mut entries = self.entries.lock().await;

        let mut next = Vec::with_capacity(self.capacity);
        next.push(entry);
        next.extend(entries.iter().take(self.capacity - 1).cloned());

        self.slot.save(&next).await?;
        *entries = next;
        Ok(())
    }

    /// Remove the entry at `index`
    ///
    /// Returns `false` and leaves the store untouched when `index` is out of
    /// bounds.
    pub async fn delete_at(&self, index: usize) -> Result<bool> {
        let mut entries = self.entries.lock().await;
        if index >= entries.len() {
            tracing::debug!(index, len = entries.len(), "delete_at ignored, no such entry");
            return Ok(false);
        }

        let mut next = entries.clone();
        next.remove(index);

        self.slot.save(&next).await?;
        *entries = next;
        Ok(true)
    }

    /// Remove every entry
    pub async fn clear(&self) -> Result<()> {
        let mut entries = self.entries.lock().await;
        self.slot.save(&[]).await?;
        entries.clear();
        Ok(())
    }

    /// Snapshot of the history, newest first
    pub async fn list(&self) -> Vec<HistoryEntry> {
        self.entries.lock().await.clone()
    }

    /// The stored result at `index`, exactly as it was first produced
    pub async fn replay(&self, index: usize) -> Result<EstimationResult> {
        let entries = self.entries.lock().await;
        entries
            .get(index)
            .map(|entry| entry.result.clone())
            .ok_or(SdkError::NotFound {
                index,
                len: entries.len(),
            })
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}
