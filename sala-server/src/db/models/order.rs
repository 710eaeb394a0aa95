//! Order Models
//!
//! Orders store a denormalized `total_amount` and a derived `status`, both
//! maintained by the ordering core whenever items change. Line items keep a
//! reference to their menu item rather than a price snapshot; totals are
//! recomputed against the current menu.

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use shared::{OrderItemStatus, OrderStatus};
use surrealdb::RecordId;

pub type OrderId = RecordId;

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<OrderId>,
    /// Dining table reference
    #[serde(with = "serde_helpers::record_id")]
    pub table: RecordId,
    #[serde(default)]
    pub status: OrderStatus,
    /// Derived sum of active line items; stored unrounded
    #[serde(default)]
    pub total_amount: f64,
    /// Staff member who opened the order
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub created_by: Option<RecordId>,
    pub notes: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Order line item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    #[serde(with = "serde_helpers::record_id")]
    pub order: RecordId,
    #[serde(with = "serde_helpers::record_id")]
    pub menu_item: RecordId,
    pub quantity: i32,
    /// Measured weight in kilograms, present for weight-based items only
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub status: OrderItemStatus,
    pub notes: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Line item joined with its menu item for display and pricing.
/// The joined fields are None when the menu item has been deleted; such
/// lines still display but contribute nothing to the total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemDetail {
    #[serde(flatten)]
    pub item: OrderItem,
    pub menu_item_name: Option<String>,
    pub menu_item_price: Option<f64>,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub is_weight_based: bool,
    pub price_per_kg: Option<f64>,
}

/// Order joined with its table number and line item details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: Order,
    pub table_number: i32,
    pub items: Vec<OrderItemDetail>,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    #[serde(with = "serde_helpers::record_id")]
    pub table: RecordId,
    pub notes: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItemCreate>,
}

/// Add line item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemCreate {
    #[serde(with = "serde_helpers::record_id")]
    pub menu_item: RecordId,
    pub quantity: i32,
    pub weight_kg: Option<f64>,
    pub notes: Option<String>,
}

/// Update line item status payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemStatusUpdate {
    pub status: OrderItemStatus,
}

/// Update order status payload (explicit actions: paid, cancelled)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}
