//! # Calculator Modules
//!
//! This module contains every calculator. Each one follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! Results additionally expose `summary_rows()` so any front-end can render
//! labeled output without knowing the tool.
//!
//! ## Available Calculators
//!
//! - [`balloon_mortgage`] - Balloon mortgage payment and schedule
//! - [`power`] - Single/three-phase AC power conversion
//! - [`capacitance`] - Series capacitance and voltage divider
//! - [`deck`] - Deck beam and joist sizing
//! - [`septic`] - Septic tank sizing
//! - [`investment`] - Dividend investment projection

pub mod balloon_mortgage;
pub mod capacitance;
pub mod deck;
pub mod investment;
pub mod power;
pub mod septic;

use serde::{Deserialize, Serialize};

use crate::display::ResultRow;
use crate::errors::CalcResult;

// Re-export commonly used types
pub use balloon_mortgage::{BalloonMortgageInput, BalloonMortgageResult, PaymentType};
pub use capacitance::{CapacitanceInput, CapacitanceResult, CapacitorEntry};
pub use deck::{DeckBeamInput, DeckBeamResult, DeckJoistInput, DeckJoistResult};
pub use investment::{InvestmentInput, InvestmentResult};
pub use power::{Phase, PowerInput, PowerResult};
pub use septic::{SepticInput, SepticResult};

/// Enum wrapper for all calculator inputs.
///
/// This allows storing heterogeneous calculations in a single collection
/// while maintaining type safety and clean serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Balloon mortgage payment and schedule
    BalloonMortgage(BalloonMortgageInput),
    /// AC power conversion
    Power(PowerInput),
    /// Series capacitance
    Capacitance(CapacitanceInput),
    /// Deck beam sizing
    DeckBeam(DeckBeamInput),
    /// Deck joist sizing
    DeckJoist(DeckJoistInput),
    /// Septic tank sizing
    Septic(SepticInput),
    /// Dividend investment projection
    Investment(InvestmentInput),
}

/// Enum wrapper for all calculator results, mirroring [`CalculationItem`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutcome {
    BalloonMortgage(BalloonMortgageResult),
    Power(PowerResult),
    Capacitance(CapacitanceResult),
    DeckBeam(DeckBeamResult),
    DeckJoist(DeckJoistResult),
    Septic(SepticResult),
    Investment(InvestmentResult),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::BalloonMortgage(i) => &i.label,
            CalculationItem::Power(i) => &i.label,
            CalculationItem::Capacitance(i) => &i.label,
            CalculationItem::DeckBeam(i) => &i.label,
            CalculationItem::DeckJoist(i) => &i.label,
            CalculationItem::Septic(i) => &i.label,
            CalculationItem::Investment(i) => &i.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::BalloonMortgage(_) => "Balloon Mortgage",
            CalculationItem::Power(_) => "AC Power",
            CalculationItem::Capacitance(_) => "Series Capacitance",
            CalculationItem::DeckBeam(_) => "Deck Beam",
            CalculationItem::DeckJoist(_) => "Deck Joist",
            CalculationItem::Septic(_) => "Septic Tank",
            CalculationItem::Investment(_) => "Investment",
        }
    }

    /// Run the calculator for this item.
    ///
    /// This is the generic evaluator contract: validated inputs in, a
    /// structured result (or typed error) out, no side effects.
    pub fn evaluate(&self) -> CalcResult<CalculationOutcome> {
        match self {
            CalculationItem::BalloonMortgage(i) => {
                balloon_mortgage::calculate(i).map(CalculationOutcome::BalloonMortgage)
            }
            CalculationItem::Power(i) => power::calculate(i).map(CalculationOutcome::Power),
            CalculationItem::Capacitance(i) => capacitance::calculate(i).map(CalculationOutcome::Capacitance),
            CalculationItem::DeckBeam(i) => deck::calculate_beam(i).map(CalculationOutcome::DeckBeam),
            CalculationItem::DeckJoist(i) => deck::calculate_joist(i).map(CalculationOutcome::DeckJoist),
            CalculationItem::Septic(i) => septic::calculate(i).map(CalculationOutcome::Septic),
            CalculationItem::Investment(i) => investment::calculate(i).map(CalculationOutcome::Investment),
        }
    }
}

impl CalculationOutcome {
    /// Labeled display rows for uniform rendering by any front-end.
    pub fn summary_rows(&self) -> Vec<ResultRow> {
        match self {
            CalculationOutcome::BalloonMortgage(r) => r.summary_rows(),
            CalculationOutcome::Power(r) => r.summary_rows(),
            CalculationOutcome::Capacitance(r) => r.summary_rows(),
            CalculationOutcome::DeckBeam(r) => r.summary_rows(),
            CalculationOutcome::DeckJoist(r) => r.summary_rows(),
            CalculationOutcome::Septic(r) => r.summary_rows(),
            CalculationOutcome::Investment(r) => r.summary_rows(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Percent;

    #[test]
    fn test_item_label_and_type() {
        let item = CalculationItem::Septic(SepticInput {
            label: "Cabin".to_string(),
            bedrooms: 2,
            garbage_disposal: false,
        });
        assert_eq!(item.label(), "Cabin");
        assert_eq!(item.calc_type(), "Septic Tank");
    }

    #[test]
    fn test_evaluate_dispatch() {
        let item = CalculationItem::Power(PowerInput {
            label: "Feed".to_string(),
            phase: Phase::Three,
            voltage_v: 480.0,
            current_a: 10.0,
            power_factor: 0.85,
        });
        let outcome = item.evaluate().unwrap();
        assert!(matches!(outcome, CalculationOutcome::Power(_)));
        assert!(!outcome.summary_rows().is_empty());
    }

    #[test]
    fn test_evaluate_propagates_errors() {
        let item = CalculationItem::Investment(InvestmentInput {
            label: "Broken".to_string(),
            initial_balance_usd: -1.0,
            annual_yield: Percent(5.0),
            monthly_contribution_usd: 0.0,
            years: 10,
            reinvest_dividends: true,
        });
        assert!(item.evaluate().is_err());
    }

    #[test]
    fn test_outcome_serialization_tagged() {
        let item = CalculationItem::Power(PowerInput {
            label: "Feed".to_string(),
            phase: Phase::Three,
            voltage_v: 480.0,
            current_a: 10.0,
            power_factor: 0.85,
        });
        let outcome = item.evaluate().unwrap();
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("\"type\":\"Power\""));

        let roundtrip: CalculationOutcome = serde_json::from_str(&json).unwrap();
        assert!(matches!(roundtrip, CalculationOutcome::Power(_)));
        assert_eq!(roundtrip.summary_rows(), outcome.summary_rows());
    }

    #[test]
    fn test_item_serialization_tagged() {
        let item = CalculationItem::Septic(SepticInput {
            label: "Cabin".to_string(),
            bedrooms: 2,
            garbage_disposal: false,
        });
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"type\":\"Septic\""));
        let roundtrip: CalculationItem = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.label(), "Cabin");
    }
}
