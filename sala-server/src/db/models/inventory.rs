//! Inventory Models
//!
//! Stock items plus an append-only movement log. Stock levels change only
//! through movements; the repository applies the delta and records the row
//! in the same call.

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use shared::MovementType;
use surrealdb::RecordId;

pub type InventoryItemId = RecordId;

/// Inventory item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<InventoryItemId>,
    pub name: String,
    /// Current stock on hand
    pub quantity: f64,
    pub unit: String,
    /// Reorder threshold; at or below means low stock
    #[serde(default)]
    pub minimum_quantity: f64,
    pub supplier: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl InventoryItem {
    /// At or below the reorder threshold
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.minimum_quantity
    }
}

/// Stock movement row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryMovement {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    #[serde(with = "serde_helpers::record_id")]
    pub inventory_item: RecordId,
    pub movement_type: MovementType,
    /// Always positive; direction comes from `movement_type`
    pub quantity: f64,
    pub reason: Option<String>,
    pub created_at: Option<String>,
}

/// Create inventory item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItemCreate {
    pub name: String,
    pub quantity: Option<f64>,
    pub unit: String,
    pub minimum_quantity: Option<f64>,
    pub supplier: Option<String>,
}

/// Update inventory item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
}

/// Record movement payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryMovementCreate {
    pub movement_type: MovementType,
    pub quantity: f64,
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_stock_boundary() {
        let mut item = InventoryItem {
            id: None,
            name: "Flour".to_string(),
            quantity: 5.0,
            unit: "kg".to_string(),
            minimum_quantity: 5.0,
            supplier: None,
            created_at: None,
            updated_at: None,
        };
        assert!(item.is_low_stock());
        item.quantity = 5.1;
        assert!(!item.is_low_stock());
    }
}
