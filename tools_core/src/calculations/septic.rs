//! # Septic Tank Sizing Calculation
//!
//! Minimum septic tank capacity from bedroom count, with a garbage-disposal
//! capacity factor and round-up to the nearest commercially available tank.
//! Bedroom count stands in for occupancy, as the health-code tables do.

use serde::{Deserialize, Serialize};

use crate::display::{format_unit, ResultRow};
use crate::errors::CalcResult;
use crate::tables::septic::{
    minimum_tank_gallons, round_up_to_standard_tank, FLOW_GPD_PER_BEDROOM, GARBAGE_DISPOSAL_FACTOR,
};

/// Input parameters for the septic tank sizing tool.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Lakeside cabin",
///   "bedrooms": 3,
///   "garbage_disposal": false
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SepticInput {
    /// User label for this property
    pub label: String,

    /// Bedroom count, 1 to 6
    pub bedrooms: u32,

    /// Whether a garbage disposal is installed (adds solids load)
    pub garbage_disposal: bool,
}

/// Results from the septic tank sizing tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SepticResult {
    /// Estimated wastewater flow (gallons per day)
    pub daily_flow_gpd: f64,

    /// Minimum required capacity after adjustments (gal)
    pub required_gallons: f64,

    /// Recommended tank: required capacity rounded up to a standard size
    pub recommended_tank_gallons: f64,
}

impl SepticResult {
    /// Labeled display rows for uniform rendering.
    pub fn summary_rows(&self) -> Vec<ResultRow> {
        vec![
            ResultRow::new("Estimated Daily Flow", format_unit(self.daily_flow_gpd, 0, "gal/day")),
            ResultRow::new("Minimum Capacity", format_unit(self.required_gallons, 0, "gal")),
            ResultRow::new("Recommended Tank", format_unit(self.recommended_tank_gallons, 0, "gal")),
        ]
    }
}

/// Calculate the recommended septic tank size.
pub fn calculate(input: &SepticInput) -> CalcResult<SepticResult> {
    let base_gallons = minimum_tank_gallons(input.bedrooms)?;
    let required_gallons = if input.garbage_disposal {
        base_gallons * GARBAGE_DISPOSAL_FACTOR
    } else {
        base_gallons
    };
    let recommended_tank_gallons = round_up_to_standard_tank(required_gallons)?;

    Ok(SepticResult {
        daily_flow_gpd: input.bedrooms as f64 * FLOW_GPD_PER_BEDROOM,
        required_gallons,
        recommended_tank_gallons,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn house(bedrooms: u32, garbage_disposal: bool) -> SepticInput {
        SepticInput {
            label: "Test house".to_string(),
            bedrooms,
            garbage_disposal,
        }
    }

    #[test]
    fn test_three_bedroom_house() {
        let result = calculate(&house(3, false)).unwrap();
        assert_eq!(result.required_gallons, 1000.0);
        assert_eq!(result.recommended_tank_gallons, 1000.0);
        assert_eq!(result.daily_flow_gpd, 450.0);
    }

    #[test]
    fn test_monotone_in_bedrooms() {
        let mut last = 0.0;
        for bedrooms in 1..=6 {
            let result = calculate(&house(bedrooms, false)).unwrap();
            assert!(result.recommended_tank_gallons >= last);
            last = result.recommended_tank_gallons;
        }
    }

    #[test]
    fn test_garbage_disposal_factor() {
        let without = calculate(&house(4, false)).unwrap();
        let with = calculate(&house(4, true)).unwrap();

        assert_eq!(with.required_gallons, without.required_gallons * 1.5);
        assert!(with.recommended_tank_gallons >= without.recommended_tank_gallons);
    }

    #[test]
    fn test_recommended_always_covers_required() {
        for bedrooms in 1..=6 {
            for disposal in [false, true] {
                let result = calculate(&house(bedrooms, disposal)).unwrap();
                assert!(result.recommended_tank_gallons >= result.required_gallons);
            }
        }
    }

    #[test]
    fn test_bedrooms_out_of_range() {
        assert_eq!(calculate(&house(0, false)).unwrap_err().error_code(), "OUT_OF_RANGE");
        assert_eq!(calculate(&house(7, false)).unwrap_err().error_code(), "OUT_OF_RANGE");
    }

    #[test]
    fn test_summary_rows() {
        let result = calculate(&house(3, false)).unwrap();
        let rows = result.summary_rows();
        assert_eq!(rows[2].label, "Recommended Tank");
        assert_eq!(rows[2].value, "1,000 gal");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = house(4, true);
        let json = serde_json::to_string(&input).unwrap();
        let roundtrip: SepticInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.bedrooms, roundtrip.bedrooms);

        let result = calculate(&input).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let roundtrip: SepticResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result.recommended_tank_gallons, roundtrip.recommended_tank_gallons);
    }
}
