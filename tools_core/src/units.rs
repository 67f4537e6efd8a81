//! # Unit Types
//!
//! Type-safe wrappers for the quantities the calculators trade in. These
//! provide compile-time safety against unit confusion while remaining
//! lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Each calculator uses a small, fixed set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! Input structs mostly carry suffix-named `f64` fields (`voltage_v`,
//! `loan_amount_usd`); newtypes are reserved for quantities where the
//! conversion itself matters, like percentage rates and capacitance units.
//!
//! ## Example
//!
//! ```rust
//! use tools_core::units::{Percent, CapacitanceUnit};
//!
//! let rate = Percent(6.5);
//! assert!((rate.monthly_fraction() - 0.0054166).abs() < 1e-6);
//!
//! let unit = CapacitanceUnit::Microfarad;
//! assert_eq!(unit.multiplier(), 1e-6);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Rates
// ============================================================================

/// Percentage value (6.5 means 6.5%)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percent(pub f64);

impl Percent {
    /// The percentage as a plain fraction (6.5% -> 0.065)
    pub fn fraction(self) -> f64 {
        self.0 / 100.0
    }

    /// The percentage as a monthly fraction (6.5% annual -> 0.065/12)
    ///
    /// This is the periodic rate used by the amortization and investment
    /// iterations.
    pub fn monthly_fraction(self) -> f64 {
        self.0 / 100.0 / 12.0
    }
}

// ============================================================================
// Electrical
// ============================================================================

/// Voltage in volts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Volts(pub f64);

/// Current in amperes
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amps(pub f64);

/// Real power in kilowatts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilowatts(pub f64);

/// Apparent power in kilovolt-amperes
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloVoltAmps(pub f64);

// ============================================================================
// Capacitance Units
// ============================================================================

/// Capacitance unit prefixes with their multipliers to farads.
///
/// Matches the dropdown choices on the capacitance tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CapacitanceUnit {
    /// Farad (F)
    Farad,
    /// Millifarad (mF) = 1e-3 F
    Millifarad,
    /// Microfarad (uF) = 1e-6 F
    #[default]
    Microfarad,
    /// Nanofarad (nF) = 1e-9 F
    Nanofarad,
    /// Picofarad (pF) = 1e-12 F
    Picofarad,
}

impl CapacitanceUnit {
    /// All units for UI selection, largest first
    pub const ALL: [CapacitanceUnit; 5] = [
        CapacitanceUnit::Farad,
        CapacitanceUnit::Millifarad,
        CapacitanceUnit::Microfarad,
        CapacitanceUnit::Nanofarad,
        CapacitanceUnit::Picofarad,
    ];

    /// Decimal multiplier to farads
    pub fn multiplier(&self) -> f64 {
        match self {
            CapacitanceUnit::Farad => 1.0,
            CapacitanceUnit::Millifarad => 1e-3,
            CapacitanceUnit::Microfarad => 1e-6,
            CapacitanceUnit::Nanofarad => 1e-9,
            CapacitanceUnit::Picofarad => 1e-12,
        }
    }

    /// Display symbol (ASCII "uF" rather than the Greek mu)
    pub fn symbol(&self) -> &'static str {
        match self {
            CapacitanceUnit::Farad => "F",
            CapacitanceUnit::Millifarad => "mF",
            CapacitanceUnit::Microfarad => "uF",
            CapacitanceUnit::Nanofarad => "nF",
            CapacitanceUnit::Picofarad => "pF",
        }
    }

    /// Parse from a form key (e.g., "uF", "nf")
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "f" | "farad" => Some(CapacitanceUnit::Farad),
            "mf" | "millifarad" => Some(CapacitanceUnit::Millifarad),
            "uf" | "microfarad" | "\u{b5}f" | "\u{3bc}f" => Some(CapacitanceUnit::Microfarad),
            "nf" | "nanofarad" => Some(CapacitanceUnit::Nanofarad),
            "pf" | "picofarad" => Some(CapacitanceUnit::Picofarad),
            _ => None,
        }
    }

    /// Pick the largest unit that shows `farads` with a mantissa >= 1.
    ///
    /// Used to auto-scale results (6.875e-6 F displays as 6.875 uF).
    pub fn best_for(farads: f64) -> Self {
        for unit in Self::ALL {
            if farads >= unit.multiplier() {
                return unit;
            }
        }
        CapacitanceUnit::Picofarad
    }
}

impl std::fmt::Display for CapacitanceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// ============================================================================
// Rounding Helpers
// ============================================================================

/// Round to whole cents (2 decimal places)
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Percent);
impl_arithmetic!(Volts);
impl_arithmetic!(Amps);
impl_arithmetic!(Kilowatts);
impl_arithmetic!(KiloVoltAmps);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_fractions() {
        let rate = Percent(6.5);
        assert!((rate.fraction() - 0.065).abs() < 1e-12);
        assert!((rate.monthly_fraction() - 0.065 / 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(1896.19671), 1896.2);
        assert_eq!(round_cents(280832.004), 280832.0);
    }

    #[test]
    fn test_capacitance_multipliers() {
        assert_eq!(CapacitanceUnit::Farad.multiplier(), 1.0);
        assert_eq!(CapacitanceUnit::Microfarad.multiplier(), 1e-6);
        assert_eq!(CapacitanceUnit::Picofarad.multiplier(), 1e-12);
    }

    #[test]
    fn test_capacitance_from_key() {
        assert_eq!(CapacitanceUnit::from_key("uF"), Some(CapacitanceUnit::Microfarad));
        assert_eq!(CapacitanceUnit::from_key(" nf "), Some(CapacitanceUnit::Nanofarad));
        assert_eq!(CapacitanceUnit::from_key("henry"), None);
    }

    #[test]
    fn test_capacitance_best_for() {
        assert_eq!(CapacitanceUnit::best_for(6.875e-6), CapacitanceUnit::Microfarad);
        assert_eq!(CapacitanceUnit::best_for(2.2e-10), CapacitanceUnit::Picofarad);
        assert_eq!(CapacitanceUnit::best_for(0.5), CapacitanceUnit::Millifarad);
        assert_eq!(CapacitanceUnit::best_for(3.0), CapacitanceUnit::Farad);
    }

    #[test]
    fn test_arithmetic() {
        let a = Amps(10.0);
        let b = Amps(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(8.31384, 2), 8.31);
        assert_eq!(round_to(7.0668, 2), 7.07);
    }

    #[test]
    fn test_serialization() {
        let v = Volts(480.0);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "480.0");

        let roundtrip: Volts = serde_json::from_str(&json).unwrap();
        assert_eq!(v, roundtrip);

        let unit = CapacitanceUnit::Nanofarad;
        let json = serde_json::to_string(&unit).unwrap();
        let roundtrip: CapacitanceUnit = serde_json::from_str(&json).unwrap();
        assert_eq!(unit, roundtrip);
    }
}
