//! Menu Item Ingredient Model
//!
//! Many-to-many link between menu items and inventory items, carrying the
//! quantity required per ordered unit.

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Ingredient requirement row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemIngredient {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    /// Menu item reference
    #[serde(with = "serde_helpers::record_id")]
    pub menu_item: RecordId,
    /// Inventory item reference
    #[serde(with = "serde_helpers::record_id")]
    pub inventory_item: RecordId,
    /// Required quantity per ordered unit
    pub quantity: f64,
    pub unit: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Ingredient requirement joined with its inventory stock level.
/// Assembled by the repository in one step; handlers never chain queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientWithStock {
    #[serde(flatten)]
    pub ingredient: MenuItemIngredient,
    pub inventory_name: String,
    pub inventory_quantity: f64,
    pub inventory_unit: String,
}

/// Add ingredient payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemIngredientCreate {
    #[serde(with = "serde_helpers::record_id")]
    pub menu_item: RecordId,
    #[serde(with = "serde_helpers::record_id")]
    pub inventory_item: RecordId,
    pub quantity: f64,
    pub unit: String,
}

/// Update ingredient payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemIngredientUpdate {
    pub quantity: f64,
    pub unit: String,
}
