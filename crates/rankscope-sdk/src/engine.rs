//! EstimationEngine - estimation plus calculation history

use crate::config::EngineConfig;
use crate::error::{Result, SdkError};
use crate::estimator::Estimator;
use crate::history::HistoryStore;
use rankscope_core::{EstimationRequest, EstimationResult, HistoryEntry, InputMode};

/// Main estimation engine
///
/// Built with [`crate::EstimationEngineBuilder`].
#[derive(Debug)]
pub struct EstimationEngine {
    estimator: Estimator,
    history: HistoryStore,
    config: EngineConfig,
}

impl EstimationEngine {
    pub(crate) fn new(estimator: Estimator, history: HistoryStore, config: EngineConfig) -> Self {
        Self {
            estimator,
            history,
            config,
        }
    }

    /// Estimate and record the result in the history
    ///
    /// A failure to persist the history is logged and does not fail the
    /// calculation.
    pub async fn calculate(
        &self,
        request: &EstimationRequest,
        application_ref: Option<&str>,
    ) -> Result<EstimationResult> {
        let result = self.estimator.estimate(request)?;

        let mut entry = HistoryEntry::new(result.clone());
        if let Some(reference) = application_ref {
            entry = entry.with_application_ref(reference);
        }
        self.record(entry).await;

        Ok(result)
    }

    /// Parse a form value, estimate with the configured pool size, and record
    pub async fn calculate_raw(
        &self,
        input_mode: InputMode,
        raw: &str,
        application_ref: Option<&str>,
    ) -> Result<EstimationResult> {
        let request = EstimationRequest::parse(input_mode, raw, self.config.pool_size)
            .map_err(|e| SdkError::Validation(e.to_string()))?;
        self.calculate(&request, application_ref).await
    }

    /// Estimate without touching the history
    pub fn preview(&self, request: &EstimationRequest) -> Result<EstimationResult> {
        self.estimator.estimate(request)
    }

    /// Append a prepared entry, logging instead of failing on storage errors
    pub async fn record(&self, entry: HistoryEntry) {
        if let Err(e) = self.history.append(entry).await {
            tracing::warn!("Failed to persist calculation history: {}", e);
        }
    }

    pub fn estimator(&self) -> &Estimator {
        &self.estimator
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
