//! # AC Power Calculation
//!
//! Pure algebraic conversions between voltage, current, power factor, and
//! real/apparent/reactive power for single-phase and three-phase circuits.
//!
//! ## Formulas
//!
//! - Three-phase apparent power: `S = sqrt(3) * V * I / 1000` (kVA)
//! - Single-phase apparent power: `S = V * I / 1000` (kVA)
//! - Real power: `P = S * PF` (kW)
//! - Reactive power: `Q = sqrt(S^2 - P^2)` (kVAR)
//!
//! ## Example
//!
//! ```rust
//! use tools_core::calculations::power::{PowerInput, Phase, calculate};
//!
//! let input = PowerInput {
//!     label: "Panel feed".to_string(),
//!     phase: Phase::Three,
//!     voltage_v: 480.0,
//!     current_a: 10.0,
//!     power_factor: 0.85,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.apparent_power_kva - 8.31).abs() < 0.01);
//! assert!((result.real_power_kw - 7.07).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};

use crate::display::{format_unit, ResultRow};
use crate::errors::{CalcError, CalcResult};
use crate::units::{Amps, KiloVoltAmps, Kilowatts, Volts};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Circuit phase configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Phase {
    /// Single-phase
    Single,
    /// Three-phase (balanced, line-to-line voltage)
    #[default]
    Three,
}

impl Phase {
    /// All phase options for UI selection
    pub const ALL: [Phase; 2] = [Phase::Single, Phase::Three];

    /// Phase multiplier: sqrt(3) for three-phase, 1 for single-phase
    pub fn factor(&self) -> f64 {
        match self {
            Phase::Single => 1.0,
            Phase::Three => SQRT_3,
        }
    }

    /// Display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Phase::Single => "Single-Phase",
            Phase::Three => "Three-Phase",
        }
    }

    /// Parse from a form key (e.g., "3", "single")
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "1" | "single" | "single-phase" => Some(Phase::Single),
            "3" | "three" | "three-phase" => Some(Phase::Three),
            _ => None,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Input parameters for the power calculator.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Panel feed",
///   "phase": "Three",
///   "voltage_v": 480.0,
///   "current_a": 10.0,
///   "power_factor": 0.85
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerInput {
    /// User label for this circuit
    pub label: String,

    /// Phase configuration
    pub phase: Phase,

    /// Line voltage in volts (line-to-line for three-phase)
    pub voltage_v: f64,

    /// Line current in amperes
    pub current_a: f64,

    /// Power factor, 0 < PF <= 1
    pub power_factor: f64,
}

impl PowerInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.voltage_v <= 0.0 {
            return Err(CalcError::invalid_input(
                "voltage_v",
                self.voltage_v.to_string(),
                "Voltage must be positive",
            ));
        }
        if self.current_a <= 0.0 {
            return Err(CalcError::invalid_input(
                "current_a",
                self.current_a.to_string(),
                "Current must be positive",
            ));
        }
        if self.power_factor <= 0.0 || self.power_factor > 1.0 {
            return Err(CalcError::out_of_range("power_factor", self.power_factor, 0.0, 1.0));
        }
        Ok(())
    }
}

/// Results from the power calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerResult {
    /// Apparent power S in kVA
    pub apparent_power_kva: f64,

    /// Real power P = S * PF in kW
    pub real_power_kw: f64,

    /// Reactive power Q = sqrt(S^2 - P^2) in kVAR
    pub reactive_power_kvar: f64,
}

impl PowerResult {
    /// Labeled display rows for uniform rendering.
    pub fn summary_rows(&self) -> Vec<ResultRow> {
        vec![
            ResultRow::new("Apparent Power", format_unit(self.apparent_power_kva, 2, "kVA")),
            ResultRow::new("Real Power", format_unit(self.real_power_kw, 2, "kW")),
            ResultRow::new("Reactive Power", format_unit(self.reactive_power_kvar, 2, "kVAR")),
        ]
    }
}

/// Apparent power for the given phase: `S = k * V * I / 1000` (kVA).
pub fn apparent_power(phase: Phase, voltage: Volts, current: Amps) -> KiloVoltAmps {
    KiloVoltAmps(phase.factor() * voltage.value() * current.value() / 1000.0)
}

/// Calculate apparent, real, and reactive power from V, I, and PF.
pub fn calculate(input: &PowerInput) -> CalcResult<PowerResult> {
    input.validate()?;

    let apparent_kva = apparent_power(input.phase, Volts(input.voltage_v), Amps(input.current_a)).value();
    let real_kw = apparent_kva * input.power_factor;
    let reactive_kvar = (apparent_kva.powi(2) - real_kw.powi(2)).max(0.0).sqrt();

    Ok(PowerResult {
        apparent_power_kva: apparent_kva,
        real_power_kw: real_kw,
        reactive_power_kvar: reactive_kvar,
    })
}

/// Line current required to deliver `real_power` at the given voltage and
/// power factor: `I = P * 1000 / (k * V * PF)`.
pub fn required_current(phase: Phase, real_power: Kilowatts, voltage: Volts, power_factor: f64) -> CalcResult<Amps> {
    if real_power.value() <= 0.0 {
        return Err(CalcError::invalid_input(
            "real_power_kw",
            real_power.value().to_string(),
            "Power must be positive",
        ));
    }
    if voltage.value() <= 0.0 {
        return Err(CalcError::invalid_input(
            "voltage_v",
            voltage.value().to_string(),
            "Voltage must be positive",
        ));
    }
    if power_factor <= 0.0 || power_factor > 1.0 {
        return Err(CalcError::out_of_range("power_factor", power_factor, 0.0, 1.0));
    }
    Ok(Amps(real_power.value() * 1000.0 / (phase.factor() * voltage.value() * power_factor)))
}

/// Equivalent single-phase current for a three-phase load:
/// `I1 = sqrt(3) * I3 * V3 / V1`.
///
/// Conserves apparent power when moving a load between systems at
/// (possibly) different voltages.
pub fn single_phase_current(three_phase_current: Amps, three_phase_voltage: Volts, single_phase_voltage: Volts) -> CalcResult<Amps> {
    if three_phase_current.value() <= 0.0 {
        return Err(CalcError::invalid_input(
            "three_phase_current_a",
            three_phase_current.value().to_string(),
            "Current must be positive",
        ));
    }
    if three_phase_voltage.value() <= 0.0 || single_phase_voltage.value() <= 0.0 {
        return Err(CalcError::invalid_input(
            "voltage_v",
            format!("{}/{}", three_phase_voltage.value(), single_phase_voltage.value()),
            "Voltages must be positive",
        ));
    }
    Ok(Amps(SQRT_3 * three_phase_current.value() * three_phase_voltage.value() / single_phase_voltage.value()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_circuit() -> PowerInput {
        PowerInput {
            label: "Test circuit".to_string(),
            phase: Phase::Three,
            voltage_v: 480.0,
            current_a: 10.0,
            power_factor: 0.85,
        }
    }

    #[test]
    fn test_three_phase_scenario() {
        // sqrt(3) * 480 * 10 / 1000 = 8.31 kVA; * 0.85 = 7.07 kW
        let result = calculate(&test_circuit()).unwrap();
        assert!((result.apparent_power_kva - 8.3138).abs() < 0.001);
        assert!((result.real_power_kw - 7.0668).abs() < 0.001);
    }

    #[test]
    fn test_real_equals_apparent_times_pf() {
        let input = test_circuit();
        let result = calculate(&input).unwrap();
        assert_eq!(result.real_power_kw, result.apparent_power_kva * input.power_factor);
    }

    #[test]
    fn test_single_phase_apparent() {
        let mut input = test_circuit();
        input.phase = Phase::Single;
        input.voltage_v = 240.0;
        input.current_a = 15.0;
        let result = calculate(&input).unwrap();

        // V * I / 1000 = 3.6 kVA
        assert!((result.apparent_power_kva - 3.6).abs() < 1e-9);
    }

    #[test]
    fn test_power_triangle() {
        // S^2 = P^2 + Q^2
        let result = calculate(&test_circuit()).unwrap();
        let s2 = result.real_power_kw.powi(2) + result.reactive_power_kvar.powi(2);
        assert!((s2.sqrt() - result.apparent_power_kva).abs() < 1e-9);
    }

    #[test]
    fn test_unity_pf_has_no_reactive() {
        let mut input = test_circuit();
        input.power_factor = 1.0;
        let result = calculate(&input).unwrap();
        assert!(result.reactive_power_kvar.abs() < 1e-9);
        assert!((result.real_power_kw - result.apparent_power_kva).abs() < 1e-9);
    }

    #[test]
    fn test_required_current_inverts_calculate() {
        let input = test_circuit();
        let result = calculate(&input).unwrap();
        let current = required_current(
            input.phase,
            Kilowatts(result.real_power_kw),
            Volts(input.voltage_v),
            input.power_factor,
        )
        .unwrap();
        assert!((current.value() - input.current_a).abs() < 1e-9);
    }

    #[test]
    fn test_single_phase_current_conversion() {
        // Same voltage both sides: I1 = sqrt(3) * I3
        let i1 = single_phase_current(Amps(10.0), Volts(240.0), Volts(240.0)).unwrap();
        assert!((i1.value() - SQRT_3 * 10.0).abs() < 1e-9);

        // 480V three-phase load moved to 240V single-phase doubles again
        let i1 = single_phase_current(Amps(10.0), Volts(480.0), Volts(240.0)).unwrap();
        assert!((i1.value() - SQRT_3 * 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_inputs() {
        let mut input = test_circuit();
        input.power_factor = 1.2;
        assert_eq!(calculate(&input).unwrap_err().error_code(), "OUT_OF_RANGE");

        let mut input = test_circuit();
        input.voltage_v = 0.0;
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_INPUT");

        assert!(required_current(Phase::Three, Kilowatts(-5.0), Volts(480.0), 0.9).is_err());
        assert!(single_phase_current(Amps(10.0), Volts(0.0), Volts(240.0)).is_err());
    }

    #[test]
    fn test_summary_rows() {
        let result = calculate(&test_circuit()).unwrap();
        let rows = result.summary_rows();
        assert_eq!(rows[0].value, "8.31 kVA");
        assert_eq!(rows[1].value, "7.07 kW");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = test_circuit();
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"phase\":\"Three\""));
        let roundtrip: PowerInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.voltage_v, roundtrip.voltage_v);

        let result = calculate(&input).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let roundtrip: PowerResult = serde_json::from_str(&json).unwrap();
        assert!((result.apparent_power_kva - roundtrip.apparent_power_kva).abs() < 1e-12);
    }
}
