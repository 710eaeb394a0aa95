//! Ingredient availability report
//!
//! Returned by the availability check: which ingredients of a menu item are
//! short in the inventory, and by how much.

use serde::{Deserialize, Serialize};

/// A single ingredient whose stock does not cover the requirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingIngredient {
    pub name: String,
    pub required: f64,
    pub available: f64,
    pub unit: String,
}

/// Availability of a menu item against current inventory.
///
/// `available` is true iff `missing` is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityReport {
    pub available: bool,
    pub missing: Vec<MissingIngredient>,
}

impl AvailabilityReport {
    pub fn from_missing(missing: Vec<MissingIngredient>) -> Self {
        Self {
            available: missing.is_empty(),
            missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_missing_is_available() {
        let report = AvailabilityReport::from_missing(vec![]);
        assert!(report.available);
    }

    #[test]
    fn test_any_missing_is_unavailable() {
        let report = AvailabilityReport::from_missing(vec![MissingIngredient {
            name: "Flour".to_string(),
            required: 0.5,
            available: 0.2,
            unit: "kg".to_string(),
        }]);
        assert!(!report.available);
        assert_eq!(report.missing.len(), 1);
    }
}
