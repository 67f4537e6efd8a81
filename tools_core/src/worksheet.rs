//! # Worksheet Container
//!
//! The `Worksheet` struct is the in-memory analogue of one open page of
//! tools: a set of calculator inputs the user is editing. It lives exactly
//! as long as the process; nothing is written to disk.
//!
//! ## Structure
//!
//! ```text
//! Worksheet
//! ├── meta: WorksheetMetadata (label, timestamps)
//! └── items: HashMap<Uuid, CalculationItem> (all calculator inputs)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use tools_core::worksheet::Worksheet;
//! use tools_core::calculations::{CalculationItem, SepticInput};
//!
//! let mut sheet = Worksheet::new("Site visit");
//!
//! let id = sheet.add_item(CalculationItem::Septic(SepticInput {
//!     label: "Main house".to_string(),
//!     bedrooms: 4,
//!     garbage_disposal: true,
//! }));
//!
//! let results = sheet.evaluate_all();
//! assert!(results[&id].is_ok());
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::{CalculationItem, CalculationOutcome};
use crate::errors::CalcResult;

/// In-memory container for a set of calculator inputs.
///
/// Items are stored in a flat UUID-keyed map for O(1) lookups and stable
/// references when items are reordered by a front-end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worksheet {
    /// Worksheet metadata (label, timestamps)
    pub meta: WorksheetMetadata,

    /// All calculator inputs, keyed by UUID
    pub items: HashMap<Uuid, CalculationItem>,
}

impl Worksheet {
    /// Create a new empty worksheet.
    pub fn new(label: impl Into<String>) -> Self {
        let now = Utc::now();
        Worksheet {
            meta: WorksheetMetadata {
                label: label.into(),
                created: now,
                modified: now,
            },
            items: HashMap::new(),
        }
    }

    /// Add a calculator input to the worksheet.
    ///
    /// Returns the UUID assigned to the item.
    pub fn add_item(&mut self, item: CalculationItem) -> Uuid {
        let id = Uuid::new_v4();
        self.items.insert(id, item);
        self.touch();
        id
    }

    /// Remove a calculator input by UUID.
    ///
    /// Returns the removed item if it existed.
    pub fn remove_item(&mut self, id: &Uuid) -> Option<CalculationItem> {
        let item = self.items.remove(id);
        if item.is_some() {
            self.touch();
        }
        item
    }

    /// Get a calculator input by UUID.
    pub fn get_item(&self, id: &Uuid) -> Option<&CalculationItem> {
        self.items.get(id)
    }

    /// Get a mutable reference to a calculator input by UUID.
    ///
    /// Getting a mutable reference marks the worksheet as modified, since
    /// the caller is presumably about to edit the item.
    pub fn get_item_mut(&mut self, id: &Uuid) -> Option<&mut CalculationItem> {
        if self.items.contains_key(id) {
            self.meta.modified = Utc::now();
            self.items.get_mut(id)
        } else {
            None
        }
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Number of items on the worksheet.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Evaluate every item, returning each result (or typed error) keyed by
    /// the item's UUID.
    ///
    /// Evaluation is pure, so a failed item never affects the others.
    pub fn evaluate_all(&self) -> HashMap<Uuid, CalcResult<CalculationOutcome>> {
        self.items
            .iter()
            .map(|(id, item)| (*id, item.evaluate()))
            .collect()
    }
}

impl Default for Worksheet {
    fn default() -> Self {
        Worksheet::new("")
    }
}

/// Worksheet metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorksheetMetadata {
    /// User label for the worksheet
    pub label: String,

    /// When the worksheet was created
    pub created: DateTime<Utc>,

    /// When the worksheet was last modified
    pub modified: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{Phase, PowerInput, SepticInput};
    use crate::units::Percent;

    fn septic_item(label: &str) -> CalculationItem {
        CalculationItem::Septic(SepticInput {
            label: label.to_string(),
            bedrooms: 3,
            garbage_disposal: false,
        })
    }

    #[test]
    fn test_add_remove_item() {
        let mut sheet = Worksheet::new("Test sheet");
        let id = sheet.add_item(septic_item("S-1"));
        assert_eq!(sheet.item_count(), 1);
        assert!(sheet.get_item(&id).is_some());

        let removed = sheet.remove_item(&id);
        assert!(removed.is_some());
        assert_eq!(sheet.item_count(), 0);
    }

    #[test]
    fn test_touch_on_mutation() {
        let mut sheet = Worksheet::new("Test sheet");
        let id = sheet.add_item(septic_item("S-1"));
        let before = sheet.meta.modified;

        if let Some(CalculationItem::Septic(input)) = sheet.get_item_mut(&id) {
            input.bedrooms = 5;
        }
        assert!(sheet.meta.modified >= before);
    }

    #[test]
    fn test_evaluate_all_mixed_results() {
        use crate::calculations::InvestmentInput;

        let mut sheet = Worksheet::new("Mixed");
        let good = sheet.add_item(CalculationItem::Power(PowerInput {
            label: "Feed".to_string(),
            phase: Phase::Three,
            voltage_v: 480.0,
            current_a: 10.0,
            power_factor: 0.85,
        }));
        let bad = sheet.add_item(CalculationItem::Investment(InvestmentInput {
            label: "Broken".to_string(),
            initial_balance_usd: 0.0,
            annual_yield: Percent(5.0),
            monthly_contribution_usd: 0.0,
            years: 10,
            reinvest_dividends: true,
        }));

        let results = sheet.evaluate_all();
        assert_eq!(results.len(), 2);
        assert!(results[&good].is_ok());
        assert!(results[&bad].is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut sheet = Worksheet::new("Roundtrip");
        sheet.add_item(septic_item("S-1"));

        let json = serde_json::to_string_pretty(&sheet).unwrap();
        assert!(json.contains("Roundtrip"));

        let roundtrip: Worksheet = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.item_count(), 1);
        assert_eq!(roundtrip.meta.label, "Roundtrip");
    }
}
