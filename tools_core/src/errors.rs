//! # Error Types
//!
//! Structured error types for tools_core. Every calculator reports invalid
//! input as a typed, serializable error instead of silently coercing bad
//! values to zero, so front-ends can highlight the offending field.
//!
//! ## Example
//!
//! ```rust
//! use tools_core::errors::{CalcError, CalcResult};
//!
//! fn validate_rate(annual_rate_pct: f64) -> CalcResult<()> {
//!     if annual_rate_pct <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "annual_rate_pct".to_string(),
//!             value: annual_rate_pct.to_string(),
//!             reason: "Interest rate must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for tools_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculator operations.
///
/// Each variant carries enough context for a front-end to point at the
/// exact form field (or reference table) that caused the failure.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (wrong sign, not a number, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is empty or absent
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A numeric value falls outside its allowed range
    #[error("'{field}' = {value} is out of range ({min} to {max})")]
    OutOfRange {
        field: String,
        value: String,
        min: String,
        max: String,
    },

    /// An enumerated choice was not recognized
    #[error("Unknown option for '{field}': {value}")]
    UnknownOption { field: String, value: String },

    /// A sizing request exceeds the static reference table
    #[error("Table lookup failed: {table} has no entry for {key} - {reason}")]
    TableLookup {
        table: String,
        key: String,
        reason: String,
    },

    /// Calculation failed due to an invalid combination of inputs
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create an OutOfRange error from numeric bounds
    pub fn out_of_range(field: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        CalcError::OutOfRange {
            field: field.into(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    /// Create an UnknownOption error
    pub fn unknown_option(field: impl Into<String>, value: impl Into<String>) -> Self {
        CalcError::UnknownOption {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a TableLookup error
    pub fn table_lookup(table: impl Into<String>, key: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::TableLookup {
            table: table.into(),
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(calculation_type: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error points at a single input field the user can fix
    pub fn is_field_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidInput { .. }
                | CalcError::MissingField { .. }
                | CalcError::OutOfRange { .. }
                | CalcError::UnknownOption { .. }
        )
    }

    /// Get the offending field name, if this is a field-level error
    pub fn field(&self) -> Option<&str> {
        match self {
            CalcError::InvalidInput { field, .. }
            | CalcError::MissingField { field }
            | CalcError::OutOfRange { field, .. }
            | CalcError::UnknownOption { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::OutOfRange { .. } => "OUT_OF_RANGE",
            CalcError::UnknownOption { .. } => "UNKNOWN_OPTION",
            CalcError::TableLookup { .. } => "TABLE_LOOKUP",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("loan_amount_usd", "-5000", "Loan amount must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("test").error_code(), "MISSING_FIELD");
        assert_eq!(
            CalcError::table_lookup("deck_beam_spans", "joist span 22 ft", "beyond table").error_code(),
            "TABLE_LOOKUP"
        );
    }

    #[test]
    fn test_field_accessor() {
        let err = CalcError::out_of_range("bedrooms", 9.0, 1.0, 6.0);
        assert!(err.is_field_error());
        assert_eq!(err.field(), Some("bedrooms"));

        let err = CalcError::calculation_failed("balloon_mortgage", "balloon term exceeds amortization");
        assert!(!err.is_field_error());
        assert_eq!(err.field(), None);
    }

    #[test]
    fn test_display_messages() {
        let err = CalcError::out_of_range("power_factor", 1.2, 0.0, 1.0);
        let msg = err.to_string();
        assert!(msg.contains("power_factor"));
        assert!(msg.contains("1.2"));
    }
}
