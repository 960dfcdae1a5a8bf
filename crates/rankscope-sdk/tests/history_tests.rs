//! Integration tests for the calculation history
//!
//! Tests capacity eviction, replay fidelity, deletion, and persistence
//! through the storage collaborator.

mod common;

use common::{engine_on, memory_engine, numbered_entry, refs};
use rankscope_sdk::{EstimationRequest, HistoryStore, Repository, SdkError};
use rankscope_repository::{HistorySlot, MemoryRepository};
use std::sync::Arc;

// ============================================================================
// Capacity and ordering
// ============================================================================

#[tokio::test]
async fn test_capacity_keeps_most_recent_newest_first() {
    let store = HistoryStore::in_memory(5).await.unwrap();

    for n in 1..=8 {
        store.append(numbered_entry(n)).await.unwrap();
    }

    let entries = store.list().await;
    assert_eq!(entries.len(), 5);
    assert_eq!(refs(&entries), vec!["APP-8", "APP-7", "APP-6", "APP-5", "APP-4"]);
}

#[tokio::test]
async fn test_engine_calculate_records_history() {
    let engine = memory_engine(5).await;

    let request = EstimationRequest::marks(185.0, 1_475_103);
    let result = engine.calculate(&request, Some("APP-77")).await.unwrap();

    let entries = engine.history().list().await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].result, result);
    assert_eq!(entries[0].application_ref.as_deref(), Some("APP-77"));
}

#[tokio::test]
async fn test_preview_does_not_record() {
    let engine = memory_engine(5).await;

    let result = engine
        .preview(&EstimationRequest::percentile(99.9, 1_000_000))
        .unwrap();

    assert_eq!(result.rank, 1_000);
    assert!(engine.history().is_empty().await);
}

#[tokio::test]
async fn test_invalid_request_not_recorded() {
    let engine = memory_engine(5).await;

    let err = engine
        .calculate(&EstimationRequest::marks(400.0, 1_000), None)
        .await
        .unwrap_err();

    assert!(matches!(err, SdkError::Validation(_)));
    assert!(engine.history().is_empty().await);
}

// ============================================================================
// Replay
// ============================================================================

#[tokio::test]
async fn test_replay_returns_identical_result() {
    let engine = memory_engine(5).await;

    let first = engine
        .calculate(&EstimationRequest::marks(185.0, 1_475_103), None)
        .await
        .unwrap();
    let second = engine
        .calculate_raw(rankscope_sdk::InputMode::Percentile, "99.9", Some("APP-2"))
        .await
        .unwrap();

    assert_eq!(engine.history().replay(0).await.unwrap(), second);
    assert_eq!(engine.history().replay(1).await.unwrap(), first);
}

#[tokio::test]
async fn test_replay_bad_index_not_found() {
    let store = HistoryStore::in_memory(5).await.unwrap();
    store.append(numbered_entry(1)).await.unwrap();

    let err = store.replay(1).await.unwrap_err();
    assert!(matches!(err, SdkError::NotFound { index: 1, len: 1 }));
}

// ============================================================================
// Deletion
// ============================================================================

#[tokio::test]
async fn test_delete_bad_index_leaves_store_unchanged() {
    let store = HistoryStore::in_memory(5).await.unwrap();
    for n in 1..=3 {
        store.append(numbered_entry(n)).await.unwrap();
    }
    let before = store.list().await;

    assert!(!store.delete_at(999).await.unwrap());

    let after = store.list().await;
    assert_eq!(after.len(), 3);
    assert_eq!(after, before);
}

#[tokio::test]
async fn test_delete_and_clear_are_persisted() {
    let repo = Arc::new(MemoryRepository::new());
    let storage: Arc<dyn Repository> = repo.clone();
    let slot = HistorySlot::new(storage.clone(), "rankscope.history");

    let store = HistoryStore::open(slot.clone(), 5).await.unwrap();
    for n in 1..=3 {
        store.append(numbered_entry(n)).await.unwrap();
    }

    assert!(store.delete_at(0).await.unwrap());
    assert_eq!(refs(&slot.load().await), vec!["APP-2", "APP-1"]);

    store.clear().await.unwrap();
    assert!(slot.load().await.is_empty());
    assert!(!repo.exists("rankscope.history").await.unwrap());
}

// ============================================================================
// Persistence
// ============================================================================

#[tokio::test]
async fn test_history_reloaded_by_new_engine() {
    let storage: Arc<dyn Repository> = Arc::new(MemoryRepository::new());

    let engine = engine_on(storage.clone(), 5).await;
    for marks in [120.0, 185.0, 300.0] {
        engine
            .calculate(&EstimationRequest::marks(marks, 1_475_103), None)
            .await
            .unwrap();
    }
    let original = engine.history().list().await;

    let reopened = engine_on(storage, 5).await;
    assert_eq!(reopened.history().list().await, original);
}

#[tokio::test]
async fn test_stored_history_truncated_to_smaller_capacity() {
    let storage: Arc<dyn Repository> = Arc::new(MemoryRepository::new());

    let wide = engine_on(storage.clone(), 5).await;
    for n in 1..=5 {
        wide.record(numbered_entry(n)).await;
    }

    let narrow = engine_on(storage, 2).await;
    assert_eq!(refs(&narrow.history().list().await), vec!["APP-5", "APP-4"]);
}

#[tokio::test]
async fn test_malformed_payload_starts_empty() {
    let storage: Arc<dyn Repository> = Arc::new(MemoryRepository::with_entry(
        "rankscope.history",
        "this is not json",
    ));

    let engine = engine_on(storage, 5).await;
    assert!(engine.history().is_empty().await);

    engine
        .calculate(&EstimationRequest::marks(200.0, 1_000), None)
        .await
        .unwrap();
    assert_eq!(engine.history().len().await, 1);
}

#[tokio::test]
async fn test_concurrent_appends_respect_capacity() {
    let store = Arc::new(HistoryStore::in_memory(5).await.unwrap());

    let tasks: Vec<_> = (0..20)
        .map(|n| {
            let store = store.clone();
            tokio::spawn(async move { store.append(numbered_entry(n)).await })
        })
        .collect();

    for task in tasks {
        task.await.unwrap().unwrap();
    }

    assert_eq!(store.len().await, 5);
}
