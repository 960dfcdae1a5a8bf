//! Estimation result

use super::request::{EstimationRequest, InputMode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of one estimation
///
/// Immutable once created; the request fields are echoed back for
/// traceability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationResult {
    /// Percentile in `[0, 100]`
    pub percentile: f64,

    /// Estimated rank, 1 is best
    pub rank: u64,

    pub input_mode: InputMode,
    pub value: f64,
    pub pool_size: u64,

    /// When the estimation was made
    pub timestamp: DateTime<Utc>,
}

impl EstimationResult {
    /// Create a result for `request`, stamped with the current time
    pub fn new(request: &EstimationRequest, percentile: f64, rank: u64) -> Self {
        Self::with_timestamp(request, percentile, rank, Utc::now())
    }

    pub fn with_timestamp(
        request: &EstimationRequest,
        percentile: f64,
        rank: u64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            percentile,
            rank,
            input_mode: request.input_mode,
            value: request.value,
            pool_size: request.pool_size,
            timestamp,
        }
    }

    /// The request this result was computed from
    pub fn request(&self) -> EstimationRequest {
        EstimationRequest::new(self.input_mode, self.value, self.pool_size)
    }
}
