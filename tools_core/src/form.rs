//! # Form Field Parsing
//!
//! The original tools receive every value as a string from a text input,
//! dropdown, or checkbox. This module is the boundary where those strings
//! become typed domain values. Anything that fails to parse or falls outside
//! the field's domain is rejected with a typed [`CalcError`] rather than
//! silently defaulting to zero.
//!
//! ## Example
//!
//! ```rust
//! use tools_core::form::NumericField;
//!
//! const LOAN_AMOUNT: NumericField = NumericField {
//!     name: "loan_amount_usd",
//!     label: "Loan Amount ($)",
//!     min: 1.0,
//!     max: 100_000_000.0,
//!     default: 300_000.0,
//! };
//!
//! assert_eq!(LOAN_AMOUNT.parse("250000").unwrap(), 250_000.0);
//! assert!(LOAN_AMOUNT.parse("-1").is_err());
//! assert!(LOAN_AMOUNT.parse("").is_err());
//! ```

use crate::errors::{CalcError, CalcResult};

/// Descriptor for a numeric form field.
///
/// Carries the field's identity (for error reporting), its valid range, and
/// the default shown when the page first loads.
#[derive(Debug, Clone, Copy)]
pub struct NumericField {
    /// Machine name used in error reports (e.g., "loan_amount_usd")
    pub name: &'static str,

    /// Human label shown next to the input (e.g., "Loan Amount ($)")
    pub label: &'static str,

    /// Smallest accepted value (inclusive)
    pub min: f64,

    /// Largest accepted value (inclusive)
    pub max: f64,

    /// Default value on first load
    pub default: f64,
}

impl NumericField {
    /// Parse a raw form string into a validated f64.
    ///
    /// - Empty or whitespace-only input is `MissingField`
    /// - Non-numeric input is `InvalidInput`
    /// - Values outside `[min, max]` are `OutOfRange`
    ///
    /// Leading `$` and thousands separators are accepted, since users paste
    /// formatted currency into these fields constantly.
    pub fn parse(&self, raw: &str) -> CalcResult<f64> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CalcError::missing_field(self.name));
        }

        let cleaned: String = trimmed
            .chars()
            .filter(|c| *c != ',' && *c != '$')
            .collect();

        let value: f64 = cleaned.parse().map_err(|_| {
            CalcError::invalid_input(self.name, trimmed, "Not a number")
        })?;

        if !value.is_finite() {
            return Err(CalcError::invalid_input(self.name, trimmed, "Not a finite number"));
        }

        self.check_range(value)?;
        Ok(value)
    }

    /// Parse like [`parse`](Self::parse), but fall back to the field default
    /// when the input is empty.
    ///
    /// Used for optional fields such as "extra monthly payment".
    pub fn parse_or_default(&self, raw: &str) -> CalcResult<f64> {
        if raw.trim().is_empty() {
            return Ok(self.default);
        }
        self.parse(raw)
    }

    /// Validate an already-numeric value against the field range.
    pub fn check_range(&self, value: f64) -> CalcResult<()> {
        if value < self.min || value > self.max {
            return Err(CalcError::out_of_range(self.name, value, self.min, self.max));
        }
        Ok(())
    }
}

/// Parse a checkbox/toggle value.
///
/// Accepts the spellings the front-ends actually send: "true"/"false",
/// "yes"/"no", "on"/"off", "1"/"0". Empty input means unchecked.
pub fn parse_flag(name: &str, raw: &str) -> CalcResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "false" | "no" | "off" | "0" => Ok(false),
        "true" | "yes" | "on" | "1" => Ok(true),
        other => Err(CalcError::unknown_option(name, other)),
    }
}

/// Parse an integer-valued field (e.g., bedroom count, number of years).
///
/// Rejects fractional values so "3.5 bedrooms" surfaces as an error instead
/// of being truncated.
pub fn parse_count(field: &NumericField, raw: &str) -> CalcResult<u32> {
    let value = field.parse(raw)?;
    if value.fract() != 0.0 {
        return Err(CalcError::invalid_input(
            field.name,
            raw.trim(),
            "Must be a whole number",
        ));
    }
    Ok(value as u32)
}
