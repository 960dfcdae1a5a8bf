//! Estimation request definitions

use crate::error::{CoreError, Result};
use crate::{MAX_MARKS, MAX_PERCENTILE};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the request `value` represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// Raw exam marks, interpolated through the bracket table
    Marks,
    /// A percentile supplied directly
    Percentile,
}

impl InputMode {
    /// Legal `(min, max)` range for values in this mode
    pub fn domain(&self) -> (f64, f64) {
        match self {
            InputMode::Marks => (0.0, MAX_MARKS),
            InputMode::Percentile => (0.0, MAX_PERCENTILE),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InputMode::Marks => "marks",
            InputMode::Percentile => "percentile",
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "marks" => Ok(InputMode::Marks),
            "percentile" => Ok(InputMode::Percentile),
            other => Err(CoreError::InvalidInputMode(other.to_string())),
        }
    }
}

/// A single estimation request
///
/// Carries no validation of its own beyond parsing; range checks happen in
/// the estimator so that every entry point applies the same rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimationRequest {
    pub input_mode: InputMode,
    pub value: f64,
    pub pool_size: u64,
}

impl EstimationRequest {
    pub fn new(input_mode: InputMode, value: f64, pool_size: u64) -> Self {
        Self {
            input_mode,
            value,
            pool_size,
        }
    }

    /// Request for raw marks
    pub fn marks(value: f64, pool_size: u64) -> Self {
        Self::new(InputMode::Marks, value, pool_size)
    }

    /// Request for a directly supplied percentile
    pub fn percentile(value: f64, pool_size: u64) -> Self {
        Self::new(InputMode::Percentile, value, pool_size)
    }

    /// Build a request from a raw form string such as `" 185 "`
    pub fn parse(input_mode: InputMode, raw: &str, pool_size: u64) -> Result<Self> {
        let trimmed = raw.trim();
        let value = trimmed
            .parse::<f64>()
            .map_err(|_| CoreError::InvalidNumber(trimmed.to_string()))?;
        Ok(Self::new(input_mode, value, pool_size))
    }

    /// Whether `value` is finite and inside the domain of `input_mode`
    pub fn value_in_domain(&self) -> bool {
        let (min, max) = self.input_mode.domain();
        self.value.is_finite() && self.value >= min && self.value <= max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_mode_from_str() {
        assert_eq!("marks".parse::<InputMode>().unwrap(), InputMode::Marks);
        assert_eq!(
            " Percentile ".parse::<InputMode>().unwrap(),
            InputMode::Percentile
        );
        assert!(matches!(
            "rank".parse::<InputMode>(),
            Err(CoreError::InvalidInputMode(_))
        ));
    }

    #[test]
    fn test_input_mode_serde() {
        let json = serde_json::to_string(&InputMode::Percentile).unwrap();
        assert_eq!(json, "\"percentile\"");
        let mode: InputMode = serde_json::from_str("\"marks\"").unwrap();
        assert_eq!(mode, InputMode::Marks);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let request = EstimationRequest::parse(InputMode::Marks, "  185.5\n", 1000).unwrap();
        assert_eq!(request.value, 185.5);
        assert_eq!(request.pool_size, 1000);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let result = EstimationRequest::parse(InputMode::Marks, "12abc", 1000);
        assert_eq!(result, Err(CoreError::InvalidNumber("12abc".to_string())));

        let result = EstimationRequest::parse(InputMode::Percentile, "", 1000);
        assert!(result.is_err());
    }

    #[test]
    fn test_value_in_domain() {
        assert!(EstimationRequest::marks(300.0, 1).value_in_domain());
        assert!(!EstimationRequest::marks(300.5, 1).value_in_domain());
        assert!(EstimationRequest::percentile(0.0, 1).value_in_domain());
        assert!(!EstimationRequest::percentile(150.0, 1).value_in_domain());
        assert!(!EstimationRequest::percentile(f64::NAN, 1).value_in_domain());
        assert!(!EstimationRequest::marks(-0.1, 1).value_in_domain());
    }
}
