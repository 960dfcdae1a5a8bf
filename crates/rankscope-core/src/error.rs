//! Error types for RankScope Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Bracket table is empty")]
    EmptyTable,

    #[error("Invalid bracket at index {index}: {reason}")]
    InvalidBracket { index: usize, reason: String },

    #[error("Bracket at index {index} is not sorted by min_marks")]
    UnsortedBrackets { index: usize },

    #[error("Bracket at index {index} overlaps its predecessor")]
    OverlappingBrackets { index: usize },

    #[error("Invalid input mode: {0}")]
    InvalidInputMode(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
