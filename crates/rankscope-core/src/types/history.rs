//! History entry

use super::result::EstimationResult;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One persisted prior computation
///
/// The metadata fields are carried for the caller and never feed into the
/// calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub result: EstimationResult,

    /// Caller-supplied reference, e.g. an application number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_ref: Option<String>,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}

impl HistoryEntry {
    pub fn new(result: EstimationResult) -> Self {
        Self {
            result,
            application_ref: None,
            metadata: HashMap::new(),
        }
    }

    /// Attach an application reference
    pub fn with_application_ref(mut self, reference: impl Into<String>) -> Self {
        self.application_ref = Some(reference.into());
        self
    }

    /// Add metadata
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

impl From<EstimationResult> for HistoryEntry {
    fn from(result: EstimationResult) -> Self {
        Self::new(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EstimationRequest;

    fn sample_result() -> EstimationResult {
        EstimationResult::new(&EstimationRequest::marks(120.0, 1000), 94.0, 60)
    }

    #[test]
    fn test_builder_methods() {
        let entry = HistoryEntry::new(sample_result())
            .with_application_ref("APP-2024-0042")
            .with_metadata("session", "morning");

        assert_eq!(entry.application_ref.as_deref(), Some("APP-2024-0042"));
        assert_eq!(entry.metadata.get("session").map(String::as_str), Some("morning"));
    }

    #[test]
    fn test_missing_optional_fields_deserialize() {
        let entry = HistoryEntry::new(sample_result());
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("application_ref"));
        assert!(!json.contains("metadata"));

        let decoded: HistoryEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, entry);
    }
}
