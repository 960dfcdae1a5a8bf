//! RankScope SDK
//!
//! High-level API for estimating percentiles and ranks from exam marks and
//! keeping a bounded history of past calculations.

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod estimator;
pub mod history;

// Re-export main types
pub use builder::EstimationEngineBuilder;
pub use config::EngineConfig;
pub use engine::EstimationEngine;
pub use error::{Result, SdkError};
pub use estimator::Estimator;
pub use history::HistoryStore;

// Re-export commonly used types from dependencies
pub use rankscope_core::{
    BracketEntry, BracketTable, EstimationRequest, EstimationResult, HistoryEntry, InputMode,
};
pub use rankscope_repository::{Repository, RepositoryConfig};
