//! Inventory Handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::ServerState;
use crate::db::models::{
    InventoryItem, InventoryItemCreate, InventoryItemUpdate, InventoryMovement,
    InventoryMovementCreate,
};
use crate::db::repository::InventoryRepository;
use crate::utils::{AppError, AppResult};

const RESOURCE: &str = "inventory_item";

/// GET /api/inventory
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<InventoryItem>>> {
    let repo = InventoryRepository::new(state.get_db());
    Ok(Json(repo.find_all().await?))
}

/// GET /api/inventory/low-stock
pub async fn low_stock(State(state): State<ServerState>) -> AppResult<Json<Vec<InventoryItem>>> {
    let repo = InventoryRepository::new(state.get_db());
    Ok(Json(repo.find_low_stock().await?))
}

/// GET /api/inventory/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<InventoryItem>> {
    let repo = InventoryRepository::new(state.get_db());
    let item = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Inventory item {} not found", id)))?;
    Ok(Json(item))
}

/// POST /api/inventory
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<InventoryItemCreate>,
) -> AppResult<Json<InventoryItem>> {
    let repo = InventoryRepository::new(state.get_db());
    let item = repo.create(payload).await?;

    let id = item.id.as_ref().map(|t| t.to_string()).unwrap_or_default();
    state.broadcast_sync(RESOURCE, "created", &id, Some(&item));

    Ok(Json(item))
}

/// PUT /api/inventory/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<InventoryItemUpdate>,
) -> AppResult<Json<InventoryItem>> {
    let repo = InventoryRepository::new(state.get_db());
    let item = repo.update(&id, payload).await?;

    state.broadcast_sync(RESOURCE, "updated", &id, Some(&item));

    Ok(Json(item))
}

/// DELETE /api/inventory/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = InventoryRepository::new(state.get_db());
    let result = repo.delete(&id).await?;

    if result {
        state.broadcast_sync::<()>(RESOURCE, "deleted", &id, None);
    }

    Ok(Json(result))
}

/// GET /api/inventory/:id/movements
pub async fn list_movements(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<InventoryMovement>>> {
    let repo = InventoryRepository::new(state.get_db());
    Ok(Json(repo.find_movements(&id).await?))
}

/// POST /api/inventory/:id/movements
///
/// Returns the item with its stock level already adjusted.
pub async fn record_movement(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<InventoryMovementCreate>,
) -> AppResult<Json<InventoryItem>> {
    let repo = InventoryRepository::new(state.get_db());
    let item = repo.record_movement(&id, payload).await?;

    state.broadcast_sync(RESOURCE, "updated", &id, Some(&item));

    Ok(Json(item))
}
