//! # Static Reference Tables
//!
//! Embedded lookup tables consulted by the sizing calculators. Tables are
//! read-only `const` data compiled into the binary; nothing here is ever
//! mutated at runtime.
//!
//! - [`deck`] - Deck beam and joist span tables with species adjustment
//! - [`septic`] - Septic tank minimum capacity by bedroom count

pub mod deck;
pub mod septic;

pub use deck::{DeckBeamSize, DeckJoistSize, JoistSpacing, SpeciesGroup};
pub use septic::STANDARD_TANK_GALLONS;
