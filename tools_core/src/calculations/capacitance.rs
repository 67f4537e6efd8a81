//! # Series Capacitance Calculation
//!
//! Total capacitance of 2 to 10 capacitors in series via the reciprocal-sum
//! rule, with an optional voltage-divider breakdown when a supply voltage is
//! given.
//!
//! ## Formulas
//!
//! - `1/C_total = sum(1/C_i)`
//! - Per-element voltage: `V_i = V_total * C_total / C_i`
//! - Shared charge: `Q = C_total * V_total` (identical for every element)
//! - Per-element energy: `E_i = 1/2 * C_i * V_i^2`
//!
//! ## Example
//!
//! ```rust
//! use tools_core::calculations::capacitance::{CapacitanceInput, CapacitorEntry, calculate};
//! use tools_core::units::CapacitanceUnit;
//!
//! let input = CapacitanceInput {
//!     label: "Coupling pair".to_string(),
//!     capacitors: vec![
//!         CapacitorEntry { value: 10.0, unit: CapacitanceUnit::Microfarad },
//!         CapacitorEntry { value: 22.0, unit: CapacitanceUnit::Microfarad },
//!     ],
//!     supply_voltage_v: None,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.total_farads - 6.875e-6).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

use crate::display::{format_number, ResultRow};
use crate::errors::{CalcError, CalcResult};
use crate::units::{round_to, CapacitanceUnit};

/// Minimum and maximum number of capacitors the tool accepts
pub const MIN_CAPACITORS: usize = 2;
pub const MAX_CAPACITORS: usize = 10;

/// One capacitor in the series chain: a value and its unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapacitorEntry {
    /// Capacitance value in the given unit
    pub value: f64,

    /// Unit prefix carrying the multiplier to farads
    pub unit: CapacitanceUnit,
}

impl CapacitorEntry {
    /// Capacitance in farads
    pub fn farads(&self) -> f64 {
        self.value * self.unit.multiplier()
    }
}

/// Input parameters for the series capacitance calculator.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Coupling pair",
///   "capacitors": [
///     { "value": 10.0, "unit": "Microfarad" },
///     { "value": 22.0, "unit": "Microfarad" }
///   ],
///   "supply_voltage_v": 12.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapacitanceInput {
    /// User label for this chain
    pub label: String,

    /// The series chain, 2 to 10 entries
    pub capacitors: Vec<CapacitorEntry>,

    /// Supply voltage across the whole chain; enables the voltage-divider
    /// breakdown when present
    pub supply_voltage_v: Option<f64>,
}

impl CapacitanceInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.capacitors.len() < MIN_CAPACITORS || self.capacitors.len() > MAX_CAPACITORS {
            return Err(CalcError::out_of_range(
                "capacitors",
                self.capacitors.len() as f64,
                MIN_CAPACITORS as f64,
                MAX_CAPACITORS as f64,
            ));
        }
        for (i, entry) in self.capacitors.iter().enumerate() {
            if entry.value <= 0.0 {
                return Err(CalcError::invalid_input(
                    format!("capacitors[{i}]"),
                    entry.value.to_string(),
                    "Capacitance must be positive",
                ));
            }
        }
        if let Some(v) = self.supply_voltage_v {
            if v <= 0.0 {
                return Err(CalcError::invalid_input(
                    "supply_voltage_v",
                    v.to_string(),
                    "Supply voltage must be positive",
                ));
            }
        }
        Ok(())
    }
}

/// Per-element results of the voltage-divider breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementVoltage {
    /// Zero-based position in the chain
    pub index: usize,

    /// Capacitance in farads
    pub capacitance_f: f64,

    /// Voltage across this element
    pub voltage_v: f64,

    /// Energy stored in this element (joules)
    pub energy_j: f64,
}

/// Voltage-divider breakdown, present when a supply voltage was given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DividerBreakdown {
    /// Charge on every element (coulombs); identical across a series chain
    pub charge_coulombs: f64,

    /// Total stored energy (joules)
    pub total_energy_j: f64,

    /// Per-element voltages and energies
    pub elements: Vec<ElementVoltage>,
}

/// Results from the series capacitance calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapacitanceResult {
    /// Total capacitance in farads
    pub total_farads: f64,

    /// Total capacitance scaled to a readable unit
    pub display_value: f64,

    /// The unit `display_value` is expressed in
    pub display_unit: CapacitanceUnit,

    /// Voltage-divider breakdown, if a supply voltage was given
    pub divider: Option<DividerBreakdown>,
}

impl CapacitanceResult {
    /// Labeled display rows for uniform rendering.
    pub fn summary_rows(&self) -> Vec<ResultRow> {
        let mut rows = vec![ResultRow::new(
            "Total Capacitance",
            format!("{} {}", format_number(self.display_value, 3), self.display_unit.symbol()),
        )];
        if let Some(divider) = &self.divider {
            rows.push(ResultRow::new(
                "Charge per Capacitor",
                format!("{:.3e} C", divider.charge_coulombs),
            ));
            rows.push(ResultRow::new(
                "Total Stored Energy",
                format!("{:.3e} J", divider.total_energy_j),
            ));
        }
        rows
    }
}

/// Calculate total series capacitance and the optional divider breakdown.
pub fn calculate(input: &CapacitanceInput) -> CalcResult<CapacitanceResult> {
    input.validate()?;

    let reciprocal_sum: f64 = input.capacitors.iter().map(|c| 1.0 / c.farads()).sum();
    let total_farads = 1.0 / reciprocal_sum;

    let display_unit = CapacitanceUnit::best_for(total_farads);
    let display_value = round_to(total_farads / display_unit.multiplier(), 6);

    let divider = input.supply_voltage_v.map(|v_total| {
        let charge = total_farads * v_total;
        let elements: Vec<ElementVoltage> = input
            .capacitors
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let c = entry.farads();
                let voltage = v_total * total_farads / c;
                ElementVoltage {
                    index,
                    capacitance_f: c,
                    voltage_v: voltage,
                    energy_j: 0.5 * c * voltage.powi(2),
                }
            })
            .collect();
        let total_energy = elements.iter().map(|e| e.energy_j).sum();
        DividerBreakdown {
            charge_coulombs: charge,
            total_energy_j: total_energy,
            elements,
        }
    });

    Ok(CapacitanceResult {
        total_farads,
        display_value,
        display_unit,
        divider,
    })
}
