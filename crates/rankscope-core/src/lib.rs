//! RankScope Core - Core types and algorithms for the RankScope estimation engine
//!
//! This crate provides the pure, I/O-free part of the engine:
//! - Bracket table reference data and lookup
//! - Percentile interpolation from raw marks
//! - Rank estimation from a percentile and a candidate pool size
//! - Request, result and history entry types
//! - Error types

pub mod bracket;
pub mod error;
pub mod interpolate;
pub mod rank;
pub mod types;

// Re-export commonly used types
pub use bracket::{BracketEntry, BracketTable, MarksGap};
pub use error::{CoreError, Result};
pub use interpolate::interpolate;
pub use rank::estimate_rank;
pub use types::{EstimationRequest, EstimationResult, HistoryEntry, InputMode};

/// Upper bound of the raw marks domain
pub const MAX_MARKS: f64 = 300.0;

/// Upper bound of the percentile domain
pub const MAX_PERCENTILE: f64 = 100.0;

/// Default number of entries kept in the calculation history
pub const HISTORY_CAPACITY: usize = 5;

/// Published total-candidates figure used when no pool size is configured
pub const DEFAULT_POOL_SIZE: u64 = 1_475_103;

/// Storage key under which the calculation history is persisted
pub const DEFAULT_HISTORY_NAMESPACE: &str = "rankscope.history";
