//! Menu Item Model
//!
//! Two pricing modes: fixed-price (per unit) and weight-based (per
//! kilogram). For weight-based items the fixed price is always stored as
//! zero and `price_per_kg` drives the cost.
//!
//! `price_per_kg` is stored per kilogram while client entry fields are per
//! hectogram; the x10 / /10 conversion happens at the payload boundary,
//! never in the ordering core.

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type MenuItemId = RecordId;

/// Menu item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<MenuItemId>,
    /// Category reference
    #[serde(with = "serde_helpers::record_id")]
    pub category: RecordId,
    pub name: String,
    pub description: Option<String>,
    /// Fixed unit price; forced to 0 when weight-based
    pub price: f64,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_available: bool,
    pub preparation_time: Option<String>,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub is_vegetarian: bool,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub is_vegan: bool,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub is_gluten_free: bool,
    /// 0 (none) to 3 (hot)
    #[serde(default)]
    pub spiciness_level: i32,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub is_weight_based: bool,
    /// Price per kilogram, present only for weight-based items
    pub price_per_kg: Option<f64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

fn default_true() -> bool {
    true
}

impl MenuItem {
    /// Price per hectogram for display (1 kg = 10 hg)
    pub fn price_per_hg(&self) -> Option<f64> {
        self.price_per_kg.map(|p| p / 10.0)
    }
}

/// Convert an entered per-hectogram price into the stored per-kilogram figure
pub fn per_hg_to_per_kg(per_hg: f64) -> f64 {
    per_hg * 10.0
}

/// Create menu item payload
///
/// `price_per_hg` is the client entry field; the repository stores x10 as
/// `price_per_kg`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    #[serde(with = "serde_helpers::record_id")]
    pub category: RecordId,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub preparation_time: Option<String>,
    #[serde(default)]
    pub allergens: Vec<String>,
    pub is_vegetarian: Option<bool>,
    pub is_vegan: Option<bool>,
    pub is_gluten_free: Option<bool>,
    pub spiciness_level: Option<i32>,
    pub is_weight_based: Option<bool>,
    pub price_per_hg: Option<f64>,
}

/// Update menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub category: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preparation_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergens: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_vegetarian: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_vegan: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_gluten_free: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spiciness_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_weight_based: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_hg: Option<f64>,
}

/// Clamp spiciness into the supported 0..=3 range
pub fn clamp_spiciness(level: i32) -> i32 {
    level.clamp(0, 3)
}
