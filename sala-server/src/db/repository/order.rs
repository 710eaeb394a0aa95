//! Order Repository
//!
//! Every write that touches line items ends with `recompute`: the stored
//! `total_amount` and `status` are re-derived from the current items via
//! the ordering core, so reads never have to aggregate.

use super::{now_rfc3339, parse_record_id, BaseRepository, RepoError, RepoResult};
use crate::db::models::{
    Order, OrderCreate, OrderDetail, OrderItem, OrderItemCreate, OrderItemDetail,
};
use crate::ordering::{self, LinePrice, OrderLine};
use shared::{OrderItemStatus, OrderStatus};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "order";
const ITEM_TABLE: &str = "order_item";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All orders, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM order ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Orders still in progress (not paid, not cancelled), oldest first
    pub async fn find_active(&self) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query(
                "SELECT * FROM order WHERE status NOT IN ['paid', 'cancelled'] \
                 ORDER BY created_at",
            )
            .await?
            .take(0)?;
        Ok(orders)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let thing = parse_record_id(id)?;
        let order: Option<Order> = self.base.db().select(thing).await?;
        Ok(order)
    }

    /// Order with its table number and line item details, one round trip
    /// per collection
    pub async fn find_detail(&self, id: &str) -> RepoResult<Option<OrderDetail>> {
        let Some(order) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        Ok(Some(self.assemble_detail(order).await?))
    }

    /// All orders as assembled read models, newest first
    pub async fn find_all_detail(&self) -> RepoResult<Vec<OrderDetail>> {
        self.assemble_details(self.find_all().await?).await
    }

    /// In-progress orders as assembled read models, oldest first
    pub async fn find_active_detail(&self) -> RepoResult<Vec<OrderDetail>> {
        self.assemble_details(self.find_active().await?).await
    }

    async fn assemble_details(&self, orders: Vec<Order>) -> RepoResult<Vec<OrderDetail>> {
        let mut details = Vec::with_capacity(orders.len());
        for order in orders {
            details.push(self.assemble_detail(order).await?);
        }
        Ok(details)
    }

    /// Join one order with its table number and line item details
    async fn assemble_detail(&self, order: Order) -> RepoResult<OrderDetail> {
        let mut result = self
            .base
            .db()
            .query("SELECT number FROM dining_table WHERE id = $table LIMIT 1")
            .bind(("table", order.table.clone()))
            .await?;
        let numbers: Vec<serde_json::Value> = result.take(0)?;
        let table_number = numbers
            .first()
            .and_then(|v| v.get("number"))
            .and_then(|n| n.as_i64())
            .unwrap_or(0) as i32;

        let order_id = order
            .id
            .clone()
            .ok_or_else(|| RepoError::Database("Order has no id".to_string()))?;
        let items = self.find_item_details(&order_id.to_string()).await?;

        Ok(OrderDetail {
            order,
            table_number,
            items,
        })
    }

    /// Line items joined with their menu item fields
    pub async fn find_item_details(&self, order_id: &str) -> RepoResult<Vec<OrderItemDetail>> {
        let order = parse_record_id(order_id)?;
        let items: Vec<OrderItemDetail> = self
            .base
            .db()
            .query(
                "SELECT *, \
                 menu_item.name AS menu_item_name, \
                 menu_item.price AS menu_item_price, \
                 menu_item.is_weight_based AS is_weight_based, \
                 menu_item.price_per_kg AS price_per_kg \
                 FROM order_item WHERE order = $order ORDER BY created_at",
            )
            .bind(("order", order))
            .await?
            .take(0)?;
        Ok(items)
    }

    pub async fn find_item_by_id(&self, item_id: &str) -> RepoResult<Option<OrderItem>> {
        let thing = parse_record_id(item_id)?;
        let item: Option<OrderItem> = self.base.db().select(thing).await?;
        Ok(item)
    }

    /// Open an order on a table, optionally with initial items.
    /// The stored total and status are derived before returning.
    pub async fn create(
        &self,
        data: OrderCreate,
        created_by: Option<RecordId>,
    ) -> RepoResult<Order> {
        let table: Option<serde_json::Value> =
            self.base.db().select(data.table.clone()).await?;
        if table.is_none() {
            return Err(RepoError::NotFound(format!(
                "Table {} not found",
                data.table
            )));
        }

        let now = now_rfc3339();
        let order = Order {
            id: None,
            table: data.table,
            status: OrderStatus::Pending,
            total_amount: 0.0,
            created_by,
            notes: data.notes,
            created_at: Some(now.clone()),
            updated_at: Some(now),
        };

        let created: Option<Order> = self.base.db().create(TABLE).content(order).await?;
        let created =
            created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))?;
        let order_id = created
            .id
            .clone()
            .ok_or_else(|| RepoError::Database("Created order has no id".to_string()))?;

        if !data.items.is_empty() {
            self.insert_items(&order_id, data.items).await?;
        }
        self.recompute(&order_id.to_string()).await
    }

    /// Append line items to an open order
    pub async fn add_items(
        &self,
        order_id: &str,
        items: Vec<OrderItemCreate>,
    ) -> RepoResult<Order> {
        if items.is_empty() {
            return Err(RepoError::Validation("No items to add".to_string()));
        }

        let thing = parse_record_id(order_id)?;
        let order = self
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", order_id)))?;
        if order.status.is_terminal() {
            return Err(RepoError::Validation(format!(
                "Order is {} and cannot be changed",
                order.status
            )));
        }

        self.insert_items(&thing, items).await?;
        self.recompute(order_id).await
    }

    async fn insert_items(
        &self,
        order_id: &RecordId,
        items: Vec<OrderItemCreate>,
    ) -> RepoResult<()> {
        for data in items {
            if data.quantity <= 0 {
                return Err(RepoError::Validation(
                    "Item quantity must be positive".to_string(),
                ));
            }
            let menu_item: Option<serde_json::Value> =
                self.base.db().select(data.menu_item.clone()).await?;
            if menu_item.is_none() {
                return Err(RepoError::NotFound(format!(
                    "Menu item {} not found",
                    data.menu_item
                )));
            }
            if let Some(weight) = data.weight_kg
                && weight <= 0.0
            {
                return Err(RepoError::Validation(
                    "Item weight must be positive".to_string(),
                ));
            }

            let now = now_rfc3339();
            let item = OrderItem {
                id: None,
                order: order_id.clone(),
                menu_item: data.menu_item,
                quantity: data.quantity,
                weight_kg: data.weight_kg,
                status: OrderItemStatus::Pending,
                notes: data.notes,
                created_at: Some(now.clone()),
                updated_at: Some(now),
            };
            let _: Option<OrderItem> = self.base.db().create(ITEM_TABLE).content(item).await?;
        }
        Ok(())
    }

    /// Change one line item's status and re-derive the order.
    /// Returns the updated order.
    pub async fn update_item_status(
        &self,
        item_id: &str,
        status: OrderItemStatus,
    ) -> RepoResult<Order> {
        let thing = parse_record_id(item_id)?;
        let item = self
            .find_item_by_id(item_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Order item {} not found", item_id)))?;

        let order_id = item.order.to_string();
        let order = self
            .find_by_id(&order_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", order_id)))?;
        if order.status.is_terminal() {
            return Err(RepoError::Validation(format!(
                "Order is {} and cannot be changed",
                order.status
            )));
        }

        self.base
            .db()
            .query("UPDATE $thing SET status = $status, updated_at = $updated_at")
            .bind(("thing", thing))
            .bind(("status", status))
            .bind(("updated_at", now_rfc3339()))
            .await?;

        self.recompute(&order_id).await
    }

    /// Remove a line item and re-derive the order
    pub async fn delete_item(&self, item_id: &str) -> RepoResult<Order> {
        let thing = parse_record_id(item_id)?;
        let item = self
            .find_item_by_id(item_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Order item {} not found", item_id)))?;

        let order_id = item.order.to_string();
        let order = self
            .find_by_id(&order_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", order_id)))?;
        if order.status.is_terminal() {
            return Err(RepoError::Validation(format!(
                "Order is {} and cannot be changed",
                order.status
            )));
        }

        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;

        self.recompute(&order_id).await
    }

    /// Explicit order status change (pay, cancel). Derivation handles the
    /// kitchen-driven transitions; this is for the terminal ones.
    pub async fn set_status(&self, id: &str, status: OrderStatus) -> RepoResult<Order> {
        let thing = parse_record_id(id)?;
        let order = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))?;
        if order.status.is_terminal() {
            return Err(RepoError::Validation(format!(
                "Order is already {}",
                order.status
            )));
        }

        self.base
            .db()
            .query("UPDATE $thing SET status = $status, updated_at = $updated_at")
            .bind(("thing", thing))
            .bind(("status", status))
            .bind(("updated_at", now_rfc3339()))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))
    }

    /// Delete an order and its line items
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = parse_record_id(id)?;
        self.base
            .db()
            .query("DELETE order_item WHERE order = $thing")
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }

    /// Re-derive and persist the order's total and status from its current
    /// line items.
    pub async fn recompute(&self, order_id: &str) -> RepoResult<Order> {
        let thing = parse_record_id(order_id)?;
        let order = self
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", order_id)))?;

        let details = self.find_item_details(order_id).await?;
        let lines: Vec<OrderLine> = details.iter().map(resolve_line).collect();
        let statuses: Vec<OrderItemStatus> = details.iter().map(|d| d.item.status).collect();

        let total = ordering::to_f64(ordering::order_total(&lines));
        let status = ordering::derive_order_status(order.status, &statuses);

        self.base
            .db()
            .query("UPDATE $thing SET total_amount = $total, status = $status, updated_at = $updated_at")
            .bind(("thing", thing))
            .bind(("total", total))
            .bind(("status", status))
            .bind(("updated_at", now_rfc3339()))
            .await?;

        self.find_by_id(order_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", order_id)))
    }
}

/// Resolve one stored line against its joined menu item fields
fn resolve_line(detail: &OrderItemDetail) -> OrderLine {
    let price = if detail.is_weight_based {
        match (detail.price_per_kg, detail.item.weight_kg) {
            (Some(per_kg), Some(weight)) => Some(LinePrice::PerKg {
                per_kg: ordering::to_decimal(per_kg),
                weight_kg: ordering::to_decimal(weight),
            }),
            _ => None,
        }
    } else {
        detail
            .menu_item_price
            .map(|p| LinePrice::Fixed(ordering::to_decimal(p)))
    };

    OrderLine {
        status: detail.item.status,
        quantity: detail.item.quantity,
        price,
    }
}
