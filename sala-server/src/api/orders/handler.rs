//! Order Handlers
//!
//! Every mutation returns the order with its freshly derived total and
//! status, so clients never display stale aggregates.

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::Deserialize;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{
    Order, OrderCreate, OrderDetail, OrderItemCreate, OrderItemStatusUpdate, OrderStatusUpdate,
};
use crate::db::repository::{parse_record_id, OrderRepository};
use crate::utils::{AppError, AppResult};
use shared::OrderStatus;

const RESOURCE: &str = "order";

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Only orders still in progress
    #[serde(default)]
    pub active: bool,
}

/// GET /api/orders?active=true
///
/// Orders come back fully assembled with their table number and resolved
/// line items, so list views never re-fetch per order.
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<OrderDetail>>> {
    let repo = OrderRepository::new(state.get_db());
    let orders = if query.active {
        repo.find_active_detail().await?
    } else {
        repo.find_all_detail().await?
    };
    Ok(Json(orders))
}

/// GET /api/orders/:id
pub async fn get_detail(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<OrderDetail>> {
    let repo = OrderRepository::new(state.get_db());
    let detail = repo
        .find_detail(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {} not found", id)))?;
    Ok(Json(detail))
}

/// POST /api/orders
pub async fn create(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<Json<Order>> {
    let repo = OrderRepository::new(state.get_db());
    let created_by = parse_record_id(&user.id).ok();
    let order = repo.create(payload, created_by).await?;

    let id = order.id.as_ref().map(|t| t.to_string()).unwrap_or_default();
    state.broadcast_sync(RESOURCE, "created", &id, Some(&order));

    Ok(Json(order))
}

/// POST /api/orders/:id/items
pub async fn add_items(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<Vec<OrderItemCreate>>,
) -> AppResult<Json<Order>> {
    let repo = OrderRepository::new(state.get_db());
    let order = repo.add_items(&id, payload).await?;

    state.broadcast_sync(RESOURCE, "updated", &id, Some(&order));

    Ok(Json(order))
}

/// PUT /api/orders/:id/status
///
/// Explicit transitions only: paid or cancelled. Everything else is
/// derived from the items.
pub async fn set_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<OrderStatusUpdate>,
) -> AppResult<Json<Order>> {
    if !matches!(payload.status, OrderStatus::Paid | OrderStatus::Cancelled) {
        return Err(AppError::business_rule(
            "Order status follows its items; only paid and cancelled can be set directly",
        ));
    }

    let repo = OrderRepository::new(state.get_db());
    let order = repo.set_status(&id, payload.status).await?;

    state.broadcast_sync(RESOURCE, "updated", &id, Some(&order));

    Ok(Json(order))
}

/// DELETE /api/orders/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = OrderRepository::new(state.get_db());
    let result = repo.delete(&id).await?;

    if result {
        state.broadcast_sync::<()>(RESOURCE, "deleted", &id, None);
    }

    Ok(Json(result))
}

/// PUT /api/order-items/:id
pub async fn update_item_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<OrderItemStatusUpdate>,
) -> AppResult<Json<Order>> {
    let repo = OrderRepository::new(state.get_db());
    let order = repo.update_item_status(&id, payload.status).await?;

    let order_id = order.id.as_ref().map(|t| t.to_string()).unwrap_or_default();
    state.broadcast_sync(RESOURCE, "updated", &order_id, Some(&order));

    Ok(Json(order))
}

/// DELETE /api/order-items/:id
pub async fn delete_item(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let repo = OrderRepository::new(state.get_db());
    let order = repo.delete_item(&id).await?;

    let order_id = order.id.as_ref().map(|t| t.to_string()).unwrap_or_default();
    state.broadcast_sync(RESOURCE, "updated", &order_id, Some(&order));

    Ok(Json(order))
}
