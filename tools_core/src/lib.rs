//! # tools_core - FreeToolsHub Calculation Engine
//!
//! `tools_core` is the computational heart of FreeToolsHub, providing the
//! formula layer behind every calculator page with a clean, JSON-first API.
//! Each calculator is a pure function over validated inputs; the browser
//! markup, routing, and SEO live elsewhere.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Typed Boundaries**: Form strings are parsed and validated before
//!   any formula runs; invalid input is a typed error, never a silent zero
//!
//! ## Quick Start
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
//! println!("{}", serde_json::to_string_pretty(&result).unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - All calculator types (mortgage, power, sizing, etc.)
//! - [`tables`] - Static reference tables (span tables, tank sizes)
//! - [`form`] - String-to-typed-value boundary parsing
//! - [`display`] - Result formatting and labeled summary rows
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`worksheet`] - In-memory container for a set of calculator inputs

pub mod calculations;
pub mod display;
pub mod errors;
pub mod form;
pub mod tables;
pub mod units;
pub mod worksheet;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculationItem, CalculationOutcome};
pub use errors::{CalcError, CalcResult};
pub use worksheet::Worksheet;
