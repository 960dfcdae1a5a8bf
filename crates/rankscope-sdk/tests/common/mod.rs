//! Common test utilities for SDK integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use rankscope_repository::{MemoryRepository, RepositoryError, RepositoryResult};
use rankscope_sdk::{
    BracketEntry, BracketTable, EstimationEngine, EstimationEngineBuilder, EstimationRequest,
    EstimationResult, HistoryEntry, Repository,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Bracket table holding only the 180-190 marks bracket
pub fn single_bracket_table() -> BracketTable {
    BracketTable::new(vec![BracketEntry::new(180.0, 190.0, 96.5, 97.5)]).unwrap()
}

/// Build an in-memory engine with the default table
pub async fn memory_engine(capacity: usize) -> EstimationEngine {
    EstimationEngineBuilder::new()
        .with_history_capacity(capacity)
        .build()
        .await
        .unwrap()
}

/// Build an engine whose history lives in `storage`
pub async fn engine_on(storage: Arc<dyn Repository>, capacity: usize) -> EstimationEngine {
    EstimationEngineBuilder::new()
        .with_history_capacity(capacity)
        .with_storage(storage)
        .build()
        .await
        .unwrap()
}

/// History entry for a marks value, tagged with its position in a sequence
pub fn numbered_entry(n: usize) -> HistoryEntry {
    let request = EstimationRequest::marks(n as f64, 1_000_000);
    HistoryEntry::new(EstimationResult::new(&request, n as f64 / 3.0, 1_000_000 - n as u64))
        .with_application_ref(format!("APP-{}", n))
}

/// Extract application references from a history listing
pub fn refs(entries: &[HistoryEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| entry.application_ref.clone().unwrap_or_default())
        .collect()
}

/// Storage whose writes can be switched to fail with an I/O error
///
/// Reads always go to the inner memory store.
#[derive(Debug, Default)]
pub struct FailingRepository {
    inner: MemoryRepository,
    fail_writes: AtomicBool,
}

impl FailingRepository {
    /// Repository that rejects every write from the start
    pub fn broken() -> Self {
        let repo = Self::default();
        repo.set_failing(true);
        repo
    }

    pub fn set_failing(&self, failing: bool) {
        self.fail_writes.store(failing, Ordering::SeqCst);
    }

    fn check_writable(&self) -> RepositoryResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(RepositoryError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "storage is read-only",
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl Repository for FailingRepository {
    async fn get(&self, key: &str) -> RepositoryResult<Option<String>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, payload: String) -> RepositoryResult<()> {
        self.check_writable()?;
        self.inner.set(key, payload).await
    }

    async fn remove(&self, key: &str) -> RepositoryResult<()> {
        self.check_writable()?;
        self.inner.remove(key).await
    }
}
