//! # Septic Tank Sizing Table
//!
//! Minimum septic tank capacity by bedroom count, patterned after typical
//! state health-code tables. Bedroom count is the regulatory proxy for
//! occupancy; the table is monotonically non-decreasing.

use crate::errors::{CalcError, CalcResult};

/// Supported bedroom counts
pub const MIN_BEDROOMS: u32 = 1;
pub const MAX_BEDROOMS: u32 = 6;

/// Estimated wastewater flow per bedroom (gallons per day)
pub const FLOW_GPD_PER_BEDROOM: f64 = 150.0;

/// Capacity factor applied when a garbage disposal is installed
pub const GARBAGE_DISPOSAL_FACTOR: f64 = 1.5;

/// Minimum tank capacity (gal) indexed by bedroom count 1..=6
const MIN_TANK_GALLONS_BY_BEDROOMS: [f64; 6] = [750.0, 750.0, 1000.0, 1250.0, 1425.0, 1650.0];

/// Commercially available tank sizes (gal), ascending
pub const STANDARD_TANK_GALLONS: [f64; 7] = [750.0, 1000.0, 1250.0, 1500.0, 1750.0, 2000.0, 2500.0];

/// Minimum required capacity (gal) for a bedroom count, before any
/// adjustment factors.
pub fn minimum_tank_gallons(bedrooms: u32) -> CalcResult<f64> {
    if !(MIN_BEDROOMS..=MAX_BEDROOMS).contains(&bedrooms) {
        return Err(CalcError::out_of_range(
            "bedrooms",
            bedrooms as f64,
            MIN_BEDROOMS as f64,
            MAX_BEDROOMS as f64,
        ));
    }
    Ok(MIN_TANK_GALLONS_BY_BEDROOMS[(bedrooms - 1) as usize])
}

/// Round a required capacity up to the nearest standard tank size.
pub fn round_up_to_standard_tank(required_gallons: f64) -> CalcResult<f64> {
    for size in STANDARD_TANK_GALLONS {
        if size >= required_gallons {
            return Ok(size);
        }
    }
    Err(CalcError::table_lookup(
        "standard_tank_sizes",
        format!("{required_gallons} gal"),
        format!(
            "Largest standard tank is {} gal; multiple tanks required",
            STANDARD_TANK_GALLONS[STANDARD_TANK_GALLONS.len() - 1]
        ),
    ))
}
