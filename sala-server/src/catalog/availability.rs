//! Ingredient availability check
//!
//! A menu item is available when, for every ingredient requirement, the
//! stock on hand covers the per-unit quantity. The check is intentionally
//! per single unit: it answers "can the kitchen make one of these right
//! now", not "how many can it make".

use crate::db::models::IngredientWithStock;
use crate::db::repository::{MenuItemIngredientRepository, RepoResult};
use shared::{AvailabilityReport, MissingIngredient};

/// Collect the ingredients whose stock does not cover one unit.
///
/// An item with no ingredient requirements is always available.
pub fn missing_ingredients(requirements: &[IngredientWithStock]) -> Vec<MissingIngredient> {
    requirements
        .iter()
        .filter(|req| req.inventory_quantity < req.ingredient.quantity)
        .map(|req| MissingIngredient {
            name: req.inventory_name.clone(),
            required: req.ingredient.quantity,
            available: req.inventory_quantity,
            unit: req.ingredient.unit.clone(),
        })
        .collect()
}

/// Availability check over the ingredient repository
#[derive(Clone)]
pub struct AvailabilityService {
    ingredients: MenuItemIngredientRepository,
}

impl AvailabilityService {
    pub fn new(ingredients: MenuItemIngredientRepository) -> Self {
        Self { ingredients }
    }

    /// Report whether one unit of the menu item can be made from current
    /// stock, and what is short if not.
    pub async fn check_menu_item(&self, menu_item_id: &str) -> RepoResult<AvailabilityReport> {
        let requirements = self
            .ingredients
            .find_for_menu_item_with_stock(menu_item_id)
            .await?;
        Ok(AvailabilityReport::from_missing(missing_ingredients(
            &requirements,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::MenuItemIngredient;

    fn requirement(name: &str, required: f64, available: f64) -> IngredientWithStock {
        IngredientWithStock {
            ingredient: MenuItemIngredient {
                id: None,
                menu_item: "menu_item:m1".parse().unwrap(),
                inventory_item: format!("inventory_item:{}", name).parse().unwrap(),
                quantity: required,
                unit: "kg".to_string(),
                created_at: None,
                updated_at: None,
            },
            inventory_name: name.to_string(),
            inventory_quantity: available,
            inventory_unit: "kg".to_string(),
        }
    }

    #[test]
    fn test_no_requirements_always_available() {
        let report = AvailabilityReport::from_missing(missing_ingredients(&[]));
        assert!(report.available);
        assert!(report.missing.is_empty());
    }

    #[test]
    fn test_exact_stock_is_enough() {
        let reqs = vec![requirement("flour", 0.5, 0.5)];
        assert!(missing_ingredients(&reqs).is_empty());
    }

    #[test]
    fn test_short_ingredient_reported() {
        let reqs = vec![
            requirement("flour", 0.5, 2.0),
            requirement("saffron", 0.01, 0.005),
        ];
        let missing = missing_ingredients(&reqs);
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].name, "saffron");
        assert_eq!(missing[0].required, 0.01);
        assert_eq!(missing[0].available, 0.005);
    }

    #[test]
    fn test_report_unavailable_when_anything_missing() {
        let reqs = vec![requirement("flour", 1.0, 0.0)];
        let report = AvailabilityReport::from_missing(missing_ingredients(&reqs));
        assert!(!report.available);
        assert_eq!(report.missing.len(), 1);
    }
}
