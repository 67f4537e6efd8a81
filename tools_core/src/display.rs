//! # Result Presentation
//!
//! Formatting helpers shared by every front-end. Each calculator result
//! exposes `summary_rows()` built from [`ResultRow`], so a front-end can
//! render any tool's output as a uniform label/value list without knowing
//! the tool.

use serde::{Deserialize, Serialize};

/// A single labeled output row, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    /// Human label (e.g., "Monthly Payment")
    pub label: String,

    /// Formatted value (e.g., "$1,896.20")
    pub value: String,
}

impl ResultRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        ResultRow {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Format a dollar amount with thousands separators: `$1,896.20`.
///
/// Negative amounts render as `-$123.45`.
pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(value.abs(), 2))
}

/// Format a number with thousands separators and fixed decimals.
pub fn format_number(value: f64, decimals: u32) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}", sign, group_thousands(value.abs(), decimals))
}

/// Format a value with a trailing unit symbol: `8.31 kVA`.
pub fn format_unit(value: f64, decimals: u32, unit: &str) -> String {
    format!("{} {}", format_number(value, decimals), unit)
}

/// Group the integer part of a non-negative value into thousands.
fn group_thousands(value: f64, decimals: u32) -> String {
    let fixed = format!("{:.*}", decimals as usize, value);
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    let digits: Vec<char> = int_part.chars().collect();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    match frac_part {
        Some(f) => format!("{}.{}", grouped, f),
        None => grouped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1896.1967), "$1,896.20");
        assert_eq!(format_currency(300000.0), "$300,000.00");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(-42.5), "-$42.50");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number(999.0, 0), "999");
        assert_eq!(format_number(1000.0, 0), "1,000");
    }

    #[test]
    fn test_format_unit() {
        assert_eq!(format_unit(8.3138, 2, "kVA"), "8.31 kVA");
        assert_eq!(format_unit(1000.0, 0, "gal"), "1,000 gal");
    }

    #[test]
    fn test_result_row_serialization() {
        let row = ResultRow::new("Monthly Payment", "$1,896.20");
        let json = serde_json::to_string(&row).unwrap();
        let roundtrip: ResultRow = serde_json::from_str(&json).unwrap();
        assert_eq!(row, roundtrip);
    }
}
