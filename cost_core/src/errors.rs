//! # Error Types
//!
//! Structured error types for cost_core. The estimation engine itself almost
//! never fails: bad numeric input degrades to zero and missing catalog keys
//! resolve to defaults. What remains are genuine faults (non-finite results)
//! and validation errors raised by the quick calculators in [`crate::tools`].
//!
//! ## Example
//!
//! ```rust
//! use cost_core::errors::{CostError, CostResult};
//!
//! fn validate_coats(coats: u32) -> CostResult<()> {
//!     if !(1..=3).contains(&coats) {
//!         return Err(CostError::invalid_input(
//!             "coats",
//!             coats.to_string(),
//!             "Coats must be between 1 and 3",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_coats(4).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for cost_core operations
pub type CostResult<T> = Result<T, CostError>;

/// Structured error type for estimation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CostError {
    /// An input value is invalid (quick calculators only)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Calculation produced an unusable result (overflow, NaN)
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    /// Catalog text could not be read as a JSON object
    #[error("Invalid catalog: {reason}")]
    InvalidCatalog { reason: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CostError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CostError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(calculation_type: impl Into<String>, reason: impl Into<String>) -> Self {
        CostError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidCatalog error
    pub fn invalid_catalog(reason: impl Into<String>) -> Self {
        CostError::InvalidCatalog {
            reason: reason.into(),
        }
    }

    /// Whether the error is a fault of the estimation engine rather than of
    /// the caller's input. The display layer shows an empty result for these.
    pub fn is_calculation_fault(&self) -> bool {
        matches!(self, CostError::CalculationFailed { .. } | CostError::Internal { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CostError::InvalidInput { .. } => "INVALID_INPUT",
            CostError::CalculationFailed { .. } => "CALCULATION_FAILED",
            CostError::InvalidCatalog { .. } => "INVALID_CATALOG",
            CostError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CostError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<serde_json::Error> for CostError {
    fn from(err: serde_json::Error) -> Self {
        CostError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CostError::invalid_input("coats", "0", "Coats must be at least 1");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CostError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CostError::invalid_catalog("not an object").error_code(), "INVALID_CATALOG");
        assert_eq!(
            CostError::calculation_failed("Basic", "totalCost is not finite").error_code(),
            "CALCULATION_FAILED"
        );
    }

    #[test]
    fn test_calculation_fault_classification() {
        assert!(CostError::calculation_failed("Advanced", "overflow").is_calculation_fault());
        assert!(!CostError::invalid_input("radius", "0", "must be positive").is_calculation_fault());
    }

    #[test]
    fn test_from_serde_error() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let cost_err: CostError = err.into();
        assert_eq!(cost_err.error_code(), "SERIALIZATION_ERROR");
    }
}
