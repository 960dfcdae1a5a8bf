//! Request, result and history types

pub mod history;
pub mod request;
pub mod result;

pub use history::HistoryEntry;
pub use request::{EstimationRequest, InputMode};
pub use result::EstimationResult;
