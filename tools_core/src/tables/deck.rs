//! # Deck Span Tables
//!
//! Allowable span tables for deck beams and joists, patterned after the
//! prescriptive residential deck tables (40 psf live / 10 psf dead, wet
//! service). Values are for the reference species (Southern Pine); other
//! species groups apply a scalar span factor.
//!
//! ## Lookup Contract
//!
//! Sizes are listed in ascending capacity order and selection is a linear
//! scan: the first size whose adjusted allowable span meets the request
//! wins. There is no interpolation between rows; a joist span between two
//! table columns rounds up to the longer (more conservative) column.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Species Groups
// ============================================================================

/// Lumber species group with its span adjustment factor.
///
/// Southern Pine is the table's reference species (factor 1.0); the other
/// groups derate allowable spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SpeciesGroup {
    /// Southern Pine (reference)
    #[default]
    SouthernPine,
    /// Douglas Fir-Larch
    DouglasFirLarch,
    /// Hem-Fir
    HemFir,
    /// Spruce-Pine-Fir
    SprucePineFir,
    /// Redwood / Western Cedar
    RedwoodCedar,
}

impl SpeciesGroup {
    /// All species groups for UI selection
    pub const ALL: [SpeciesGroup; 5] = [
        SpeciesGroup::SouthernPine,
        SpeciesGroup::DouglasFirLarch,
        SpeciesGroup::HemFir,
        SpeciesGroup::SprucePineFir,
        SpeciesGroup::RedwoodCedar,
    ];

    /// Span adjustment factor relative to Southern Pine
    pub fn span_factor(&self) -> f64 {
        match self {
            SpeciesGroup::SouthernPine => 1.0,
            SpeciesGroup::DouglasFirLarch => 0.95,
            SpeciesGroup::HemFir => 0.92,
            SpeciesGroup::SprucePineFir => 0.90,
            SpeciesGroup::RedwoodCedar => 0.85,
        }
    }

    /// Display name (e.g., "Southern Pine")
    pub fn display_name(&self) -> &'static str {
        match self {
            SpeciesGroup::SouthernPine => "Southern Pine",
            SpeciesGroup::DouglasFirLarch => "Douglas Fir-Larch",
            SpeciesGroup::HemFir => "Hem-Fir",
            SpeciesGroup::SprucePineFir => "Spruce-Pine-Fir",
            SpeciesGroup::RedwoodCedar => "Redwood/Cedar",
        }
    }

    /// Parse from a form key (e.g., "southern-pine", "df-l")
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "sp" | "southern-pine" | "southern pine" => Some(SpeciesGroup::SouthernPine),
            "df" | "df-l" | "douglas-fir" | "douglas fir-larch" => Some(SpeciesGroup::DouglasFirLarch),
            "hf" | "hem-fir" => Some(SpeciesGroup::HemFir),
            "spf" | "spruce-pine-fir" => Some(SpeciesGroup::SprucePineFir),
            "cedar" | "redwood" | "redwood-cedar" => Some(SpeciesGroup::RedwoodCedar),
            _ => None,
        }
    }
}

impl std::fmt::Display for SpeciesGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Beam Span Table
// ============================================================================

/// Joist-span column headers for the beam table (ft)
pub const JOIST_SPAN_BUCKETS_FT: [f64; 7] = [6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0];

/// Standard built-up deck beam sizes, ascending capacity order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DeckBeamSize {
    /// 2-2x6 (two-ply 2x6)
    B2x6x2,
    /// 2-2x8
    B2x8x2,
    /// 2-2x10
    #[default]
    B2x10x2,
    /// 3-2x8
    B2x8x3,
    /// 2-2x12
    B2x12x2,
    /// 3-2x10
    B2x10x3,
    /// 3-2x12
    B2x12x3,
}

impl DeckBeamSize {
    /// All beam sizes in ascending capacity order (the scan order)
    pub const ALL: [DeckBeamSize; 7] = [
        DeckBeamSize::B2x6x2,
        DeckBeamSize::B2x8x2,
        DeckBeamSize::B2x10x2,
        DeckBeamSize::B2x8x3,
        DeckBeamSize::B2x12x2,
        DeckBeamSize::B2x10x3,
        DeckBeamSize::B2x12x3,
    ];

    /// Display name (e.g., "2-2x10" for a two-ply 2x10)
    pub fn display_name(&self) -> &'static str {
        match self {
            DeckBeamSize::B2x6x2 => "2-2x6",
            DeckBeamSize::B2x8x2 => "2-2x8",
            DeckBeamSize::B2x10x2 => "2-2x10",
            DeckBeamSize::B2x8x3 => "3-2x8",
            DeckBeamSize::B2x12x2 => "2-2x12",
            DeckBeamSize::B2x10x3 => "3-2x10",
            DeckBeamSize::B2x12x3 => "3-2x12",
        }
    }

    /// Allowable beam spans (ft) for the reference species, one entry per
    /// column of [`JOIST_SPAN_BUCKETS_FT`].
    fn reference_spans_ft(&self) -> [f64; 7] {
        match self {
            DeckBeamSize::B2x6x2 => [6.9, 5.9, 5.3, 4.8, 4.5, 4.25, 4.0],
            DeckBeamSize::B2x8x2 => [8.75, 7.6, 6.75, 6.2, 5.75, 5.3, 5.0],
            DeckBeamSize::B2x10x2 => [10.3, 9.0, 8.0, 7.3, 6.75, 6.3, 6.0],
            DeckBeamSize::B2x8x3 => [10.8, 9.5, 8.5, 7.75, 7.2, 6.7, 6.3],
            DeckBeamSize::B2x12x2 => [12.2, 10.6, 9.4, 8.6, 8.0, 7.5, 7.0],
            DeckBeamSize::B2x10x3 => [13.0, 11.25, 10.0, 9.2, 8.5, 8.0, 7.5],
            DeckBeamSize::B2x12x3 => [15.25, 13.25, 11.8, 10.75, 10.0, 9.3, 8.8],
        }
    }
}

impl std::fmt::Display for DeckBeamSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Find the beam-table column for a joist span, rounding up to the next
/// bucket. Spans beyond the last column are a table miss.
fn joist_span_bucket(joist_span_ft: f64) -> CalcResult<usize> {
    for (i, bucket) in JOIST_SPAN_BUCKETS_FT.iter().enumerate() {
        if joist_span_ft <= *bucket {
            return Ok(i);
        }
    }
    Err(CalcError::table_lookup(
        "deck_beam_spans",
        format!("joist span {joist_span_ft} ft"),
        format!(
            "Table covers joist spans up to {} ft",
            JOIST_SPAN_BUCKETS_FT[JOIST_SPAN_BUCKETS_FT.len() - 1]
        ),
    ))
}

/// Allowable beam span (ft) for a size, joist span, and species.
pub fn allowable_beam_span_ft(
    size: DeckBeamSize,
    joist_span_ft: f64,
    species: SpeciesGroup,
) -> CalcResult<f64> {
    let bucket = joist_span_bucket(joist_span_ft)?;
    Ok(size.reference_spans_ft()[bucket] * species.span_factor())
}

/// Select the smallest beam size whose adjusted allowable span covers the
/// requested beam span. Returns the size and its allowable span.
pub fn select_beam(
    joist_span_ft: f64,
    beam_span_ft: f64,
    species: SpeciesGroup,
) -> CalcResult<(DeckBeamSize, f64)> {
    let bucket = joist_span_bucket(joist_span_ft)?;
    for size in DeckBeamSize::ALL {
        let allowable = size.reference_spans_ft()[bucket] * species.span_factor();
        if allowable >= beam_span_ft {
            return Ok((size, allowable));
        }
    }
    Err(CalcError::table_lookup(
        "deck_beam_spans",
        format!("beam span {beam_span_ft} ft at joist span {joist_span_ft} ft"),
        "No standard beam size is adequate; an engineered beam or mid-span post is required",
    ))
}

// ============================================================================
// Joist Span Table
// ============================================================================

/// Joist on-center spacing options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum JoistSpacing {
    /// 12 inches on center
    In12,
    /// 16 inches on center
    #[default]
    In16,
    /// 24 inches on center
    In24,
}

impl JoistSpacing {
    /// All spacing options for UI selection
    pub const ALL: [JoistSpacing; 3] = [JoistSpacing::In12, JoistSpacing::In16, JoistSpacing::In24];

    /// On-center spacing in inches
    pub fn inches(&self) -> u8 {
        match self {
            JoistSpacing::In12 => 12,
            JoistSpacing::In16 => 16,
            JoistSpacing::In24 => 24,
        }
    }

    /// Display label (e.g., "16\" o.c.")
    pub fn display_name(&self) -> &'static str {
        match self {
            JoistSpacing::In12 => "12\" o.c.",
            JoistSpacing::In16 => "16\" o.c.",
            JoistSpacing::In24 => "24\" o.c.",
        }
    }

    /// Parse from a form key (e.g., "16")
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "12" => Some(JoistSpacing::In12),
            "16" => Some(JoistSpacing::In16),
            "24" => Some(JoistSpacing::In24),
            _ => None,
        }
    }

    fn column(&self) -> usize {
        match self {
            JoistSpacing::In12 => 0,
            JoistSpacing::In16 => 1,
            JoistSpacing::In24 => 2,
        }
    }
}

impl std::fmt::Display for JoistSpacing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Standard deck joist sizes, ascending capacity order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DeckJoistSize {
    /// 2x6
    J2x6,
    /// 2x8
    #[default]
    J2x8,
    /// 2x10
    J2x10,
    /// 2x12
    J2x12,
}

impl DeckJoistSize {
    /// All joist sizes in ascending capacity order (the scan order)
    pub const ALL: [DeckJoistSize; 4] = [
        DeckJoistSize::J2x6,
        DeckJoistSize::J2x8,
        DeckJoistSize::J2x10,
        DeckJoistSize::J2x12,
    ];

    /// Display name (e.g., "2x10")
    pub fn display_name(&self) -> &'static str {
        match self {
            DeckJoistSize::J2x6 => "2x6",
            DeckJoistSize::J2x8 => "2x8",
            DeckJoistSize::J2x10 => "2x10",
            DeckJoistSize::J2x12 => "2x12",
        }
    }

    /// Allowable joist spans (ft) for the reference species at
    /// 12" / 16" / 24" on-center spacing.
    fn reference_spans_ft(&self) -> [f64; 3] {
        match self {
            DeckJoistSize::J2x6 => [9.9, 9.0, 7.6],
            DeckJoistSize::J2x8 => [13.1, 11.8, 9.7],
            DeckJoistSize::J2x10 => [16.2, 14.0, 11.4],
            DeckJoistSize::J2x12 => [18.0, 16.5, 13.5],
        }
    }
}

impl std::fmt::Display for DeckJoistSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Allowable joist span (ft) for a size, spacing, and species.
pub fn allowable_joist_span_ft(size: DeckJoistSize, spacing: JoistSpacing, species: SpeciesGroup) -> f64 {
    size.reference_spans_ft()[spacing.column()] * species.span_factor()
}

/// Select the smallest joist size that spans the requested distance at the
/// given spacing. Returns the size and its allowable span.
pub fn select_joist(
    span_ft: f64,
    spacing: JoistSpacing,
    species: SpeciesGroup,
) -> CalcResult<(DeckJoistSize, f64)> {
    for size in DeckJoistSize::ALL {
        let allowable = allowable_joist_span_ft(size, spacing, species);
        if allowable >= span_ft {
            return Ok((size, allowable));
        }
    }
    Err(CalcError::table_lookup(
        "deck_joist_spans",
        format!("span {span_ft} ft at {}", spacing.display_name()),
        "No standard joist size is adequate; reduce span or spacing",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beam_table_monotone_per_column() {
        // Each size up the scan order must be at least as strong in every column
        for pair in DeckBeamSize::ALL.windows(2) {
            let lo = pair[0].reference_spans_ft();
            let hi = pair[1].reference_spans_ft();
            for col in 0..JOIST_SPAN_BUCKETS_FT.len() {
                assert!(
                    hi[col] >= lo[col],
                    "{} weaker than {} at column {}",
                    pair[1].display_name(),
                    pair[0].display_name(),
                    col
                );
            }
        }
    }

    #[test]
    fn test_beam_spans_shrink_with_joist_span() {
        // Longer joist spans put more load on the beam, so allowable spans drop
        for size in DeckBeamSize::ALL {
            let spans = size.reference_spans_ft();
            for pair in spans.windows(2) {
                assert!(pair[1] <= pair[0]);
            }
        }
    }

    #[test]
    fn test_joist_span_bucket_rounds_up() {
        assert_eq!(joist_span_bucket(6.0).unwrap(), 0);
        assert_eq!(joist_span_bucket(6.5).unwrap(), 1);
        assert_eq!(joist_span_bucket(18.0).unwrap(), 6);
        assert!(joist_span_bucket(18.5).is_err());
    }

    #[test]
    fn test_select_beam_first_adequate_wins() {
        // 10 ft joists, 7 ft beam span: 2-2x10 allows 8.0 ft and is the
        // first adequate entry (2-2x8 tops out at 6.75 ft)
        let (size, allowable) = select_beam(10.0, 7.0, SpeciesGroup::SouthernPine).unwrap();
        assert_eq!(size, DeckBeamSize::B2x10x2);
        assert!((allowable - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_select_beam_species_derate() {
        // Cedar at 0.85 pushes the same request up a size:
        // 2-2x10 adjusted = 8.0 * 0.85 = 6.8 < 7.0, so 3-2x8 (8.5 * 0.85 = 7.225)
        let (size, _) = select_beam(10.0, 7.0, SpeciesGroup::RedwoodCedar).unwrap();
        assert_eq!(size, DeckBeamSize::B2x8x3);
    }

    #[test]
    fn test_select_beam_exhausted() {
        let err = select_beam(18.0, 12.0, SpeciesGroup::SouthernPine).unwrap_err();
        assert_eq!(err.error_code(), "TABLE_LOOKUP");
    }

    #[test]
    fn test_select_beam_longer_span_never_smaller() {
        let spans = [4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        let mut last_index = 0;
        for span in spans {
            let (size, _) = select_beam(12.0, span, SpeciesGroup::SouthernPine).unwrap();
            let index = DeckBeamSize::ALL.iter().position(|s| *s == size).unwrap();
            assert!(index >= last_index, "beam shrank at span {span}");
            last_index = index;
        }
    }

    #[test]
    fn test_select_joist() {
        let (size, allowable) = select_joist(12.0, JoistSpacing::In16, SpeciesGroup::SouthernPine).unwrap();
        assert_eq!(size, DeckJoistSize::J2x10);
        assert!((allowable - 14.0).abs() < 1e-9);

        // Tighter spacing lets a smaller joist work
        let (size, _) = select_joist(12.0, JoistSpacing::In12, SpeciesGroup::SouthernPine).unwrap();
        assert_eq!(size, DeckJoistSize::J2x8);
    }

    #[test]
    fn test_select_joist_exhausted() {
        let err = select_joist(20.0, JoistSpacing::In24, SpeciesGroup::SouthernPine).unwrap_err();
        assert_eq!(err.error_code(), "TABLE_LOOKUP");
    }

    #[test]
    fn test_species_factors() {
        assert_eq!(SpeciesGroup::SouthernPine.span_factor(), 1.0);
        for species in SpeciesGroup::ALL {
            let f = species.span_factor();
            assert!(f > 0.0 && f <= 1.0);
        }
    }

    #[test]
    fn test_from_keys() {
        assert_eq!(SpeciesGroup::from_key("DF-L"), Some(SpeciesGroup::DouglasFirLarch));
        assert_eq!(SpeciesGroup::from_key("mahogany"), None);
        assert_eq!(JoistSpacing::from_key("16"), Some(JoistSpacing::In16));
        assert_eq!(JoistSpacing::from_key("13"), None);
    }

    #[test]
    fn test_serialization() {
        let size = DeckBeamSize::B2x10x3;
        let json = serde_json::to_string(&size).unwrap();
        let parsed: DeckBeamSize = serde_json::from_str(&json).unwrap();
        assert_eq!(size, parsed);

        let spacing = JoistSpacing::In24;
        let json = serde_json::to_string(&spacing).unwrap();
        let parsed: JoistSpacing = serde_json::from_str(&json).unwrap();
        assert_eq!(spacing, parsed);
    }
}
