//! Estimator - validation and dispatch for a single estimation
//!
//! Marks requests go through the bracket table; percentile requests skip
//! it. Both end in the rank estimator. Nothing here touches the history.

use crate::error::{Result, SdkError};
use rankscope_core::{
    estimate_rank, BracketTable, EstimationRequest, EstimationResult, InputMode,
    DEFAULT_POOL_SIZE,
};
use std::sync::Arc;

/// Estimation facade over an immutable bracket table
///
/// Cheap to clone; clones share the table.
#[derive(Debug, Clone)]
pub struct Estimator {
    table: Arc<BracketTable>,
    default_pool_size: u64,
}

impl Estimator {
    /// Create an estimator over `table` using the published pool size
    pub fn new(table: BracketTable) -> Self {
        Self {
            table: Arc::new(table),
            default_pool_size: DEFAULT_POOL_SIZE,
        }
    }

    /// Pool size used by the `estimate_marks` / `estimate_percentile` shortcuts
    pub fn with_default_pool_size(mut self, pool_size: u64) -> Self {
        self.default_pool_size = pool_size;
        self
    }

    pub fn table(&self) -> &BracketTable {
        &self.table
    }

    pub fn default_pool_size(&self) -> u64 {
        self.default_pool_size
    }

    /// Reject requests the engine cannot answer meaningfully
    pub fn validate(request: &EstimationRequest) -> Result<()> {
        if !request.value_in_domain() {
            let (min, max) = request.input_mode.domain();
            return Err(SdkError::Validation(format!(
                "{} must be a finite number within [{}, {}], got {}",
                request.input_mode, min, max, request.value
            )));
        }
        if request.pool_size == 0 {
            return Err(SdkError::Validation(
                "pool_size must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }

    /// Validate `request` and compute its percentile and rank
    ///
    /// # Example
    ///
    /// ```
    /// use rankscope_sdk::{EstimationRequest, Estimator};
    ///
    /// let estimator = Estimator::default();
    /// let result = estimator
    ///     .estimate(&EstimationRequest::percentile(99.9, 1_000_000))
    ///     .unwrap();
    /// assert_eq!(result.rank, 1_000);
    /// ```
    pub fn estimate(&self, request: &EstimationRequest) -> Result<EstimationResult> {
        Self::validate(request)?;

        let percentile = match request.input_mode {
            InputMode::Marks => self.table.interpolate(request.value),
            InputMode::Percentile => request.value,
        };
        let rank = estimate_rank(percentile, request.pool_size);

        tracing::debug!(
            mode = %request.input_mode,
            value = request.value,
            pool_size = request.pool_size,
            percentile,
            rank,
            "estimated"
        );

        Ok(EstimationResult::new(request, percentile, rank))
    }

    /// Estimate from raw marks with the default pool size
    pub fn estimate_marks(&self, marks: f64) -> Result<EstimationResult> {
        self.estimate(&EstimationRequest::marks(marks, self.default_pool_size))
    }

    /// Estimate from a percentile with the default pool size
    pub fn estimate_percentile(&self, percentile: f64) -> Result<EstimationResult> {
        self.estimate(&EstimationRequest::percentile(
            percentile,
            self.default_pool_size,
        ))
    }

    /// Estimate from an unparsed form value with the default pool size
    pub fn estimate_raw(&self, input_mode: InputMode, raw: &str) -> Result<EstimationResult> {
        let request = EstimationRequest::parse(input_mode, raw, self.default_pool_size)
            .map_err(|e| SdkError::Validation(e.to_string()))?;
        self.estimate(&request)
    }
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new(BracketTable::default())
    }
}
