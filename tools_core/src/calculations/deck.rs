//! # Deck Sizing Calculation
//!
//! Selects deck beam and joist sizes from the static span tables. This is a
//! lookup calculator: all the engineering lives in
//! [`crate::tables::deck`]; this module validates the form inputs, runs the
//! scan-and-select, and packages the result.

use serde::{Deserialize, Serialize};

use crate::display::{format_unit, ResultRow};
use crate::errors::{CalcError, CalcResult};
use crate::tables::deck::{
    allowable_joist_span_ft, select_beam, select_joist, DeckBeamSize, DeckJoistSize, JoistSpacing,
    SpeciesGroup, JOIST_SPAN_BUCKETS_FT,
};

/// Input parameters for the deck beam sizing tool.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Back deck",
///   "joist_span_ft": 10.0,
///   "beam_span_ft": 7.0,
///   "species": "SouthernPine"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckBeamInput {
    /// User label for this deck
    pub label: String,

    /// Joist span carried by the beam (ft)
    pub joist_span_ft: f64,

    /// Required beam span between posts (ft)
    pub beam_span_ft: f64,

    /// Lumber species group
    pub species: SpeciesGroup,
}

impl DeckBeamInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.joist_span_ft <= 0.0 {
            return Err(CalcError::invalid_input(
                "joist_span_ft",
                self.joist_span_ft.to_string(),
                "Joist span must be positive",
            ));
        }
        if self.beam_span_ft <= 0.0 {
            return Err(CalcError::invalid_input(
                "beam_span_ft",
                self.beam_span_ft.to_string(),
                "Beam span must be positive",
            ));
        }
        Ok(())
    }
}

/// Results from the deck beam sizing tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckBeamResult {
    /// Smallest adequate built-up beam
    pub beam_size: DeckBeamSize,

    /// Allowable span of the selected beam at this joist span (ft),
    /// adjusted for species
    pub allowable_span_ft: f64,

    /// Margin between allowable and required span (ft)
    pub span_margin_ft: f64,
}

impl DeckBeamResult {
    /// Labeled display rows for uniform rendering.
    pub fn summary_rows(&self) -> Vec<ResultRow> {
        vec![
            ResultRow::new("Beam Size", self.beam_size.display_name()),
            ResultRow::new("Allowable Span", format_unit(self.allowable_span_ft, 2, "ft")),
            ResultRow::new("Span Margin", format_unit(self.span_margin_ft, 2, "ft")),
        ]
    }
}

/// Select the smallest standard beam for the requested spans.
pub fn calculate_beam(input: &DeckBeamInput) -> CalcResult<DeckBeamResult> {
    input.validate()?;

    let (beam_size, allowable_span_ft) = select_beam(input.joist_span_ft, input.beam_span_ft, input.species)?;

    Ok(DeckBeamResult {
        beam_size,
        allowable_span_ft,
        span_margin_ft: allowable_span_ft - input.beam_span_ft,
    })
}

/// Input parameters for the deck joist sizing tool.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Back deck",
///   "span_ft": 12.0,
///   "spacing": "In16",
///   "species": "SouthernPine"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckJoistInput {
    /// User label for this deck
    pub label: String,

    /// Required joist span (ft)
    pub span_ft: f64,

    /// On-center joist spacing
    pub spacing: JoistSpacing,

    /// Lumber species group
    pub species: SpeciesGroup,
}

impl DeckJoistInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.span_ft <= 0.0 {
            return Err(CalcError::invalid_input(
                "span_ft",
                self.span_ft.to_string(),
                "Joist span must be positive",
            ));
        }
        Ok(())
    }
}

/// Results from the deck joist sizing tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckJoistResult {
    /// Smallest adequate joist size
    pub joist_size: DeckJoistSize,

    /// Allowable span of the selected joist at this spacing (ft),
    /// adjusted for species
    pub allowable_span_ft: f64,

    /// Allowable spans for the selected size at every spacing, for the
    /// expandable "sizing table" view
    pub spacing_options: Vec<SpacingOption>,
}

/// One row of the expandable spacing table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpacingOption {
    /// On-center spacing
    pub spacing: JoistSpacing,

    /// Allowable span at this spacing (ft)
    pub allowable_span_ft: f64,
}

impl DeckJoistResult {
    /// Labeled display rows for uniform rendering.
    pub fn summary_rows(&self) -> Vec<ResultRow> {
        vec![
            ResultRow::new("Joist Size", self.joist_size.display_name()),
            ResultRow::new("Allowable Span", format_unit(self.allowable_span_ft, 2, "ft")),
        ]
    }
}

/// Select the smallest standard joist for the requested span and spacing.
pub fn calculate_joist(input: &DeckJoistInput) -> CalcResult<DeckJoistResult> {
    input.validate()?;

    let (joist_size, allowable_span_ft) = select_joist(input.span_ft, input.spacing, input.species)?;

    let spacing_options = JoistSpacing::ALL
        .iter()
        .map(|spacing| SpacingOption {
            spacing: *spacing,
            allowable_span_ft: allowable_joist_span_ft(joist_size, *spacing, input.species),
        })
        .collect();

    Ok(DeckJoistResult {
        joist_size,
        allowable_span_ft,
        spacing_options,
    })
}

/// Largest joist span the beam table covers (ft); exposed so front-ends can
/// bound their inputs.
pub fn max_joist_span_ft() -> f64 {
    JOIST_SPAN_BUCKETS_FT[JOIST_SPAN_BUCKETS_FT.len() - 1]
}
