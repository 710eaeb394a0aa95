//! Dining Table Handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::ServerState;
use crate::db::models::{
    DiningTable, DiningTableCreate, DiningTableUpdate, TableMergeRequest, TablePositionUpdate,
    TableStatusUpdate,
};
use crate::db::repository::DiningTableRepository;
use crate::utils::{AppError, AppResult};

const RESOURCE: &str = "dining_table";

/// GET /api/tables
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<DiningTable>>> {
    let repo = DiningTableRepository::new(state.get_db());
    Ok(Json(repo.find_all().await?))
}

/// GET /api/tables/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DiningTable>> {
    let repo = DiningTableRepository::new(state.get_db());
    let table = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Table {} not found", id)))?;
    Ok(Json(table))
}

/// POST /api/tables
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DiningTableCreate>,
) -> AppResult<Json<DiningTable>> {
    let repo = DiningTableRepository::new(state.get_db());
    let table = repo.create(payload).await?;

    let id = table.id.as_ref().map(|t| t.to_string()).unwrap_or_default();
    state.broadcast_sync(RESOURCE, "created", &id, Some(&table));

    Ok(Json(table))
}

/// PUT /api/tables/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<DiningTableUpdate>,
) -> AppResult<Json<DiningTable>> {
    let repo = DiningTableRepository::new(state.get_db());
    let table = repo.update(&id, payload).await?;

    state.broadcast_sync(RESOURCE, "updated", &id, Some(&table));

    Ok(Json(table))
}

/// DELETE /api/tables/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = DiningTableRepository::new(state.get_db());
    let result = repo.delete(&id).await?;

    if result {
        state.broadcast_sync::<()>(RESOURCE, "deleted", &id, None);
    }

    Ok(Json(result))
}

/// PUT /api/tables/:id/status
pub async fn set_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<TableStatusUpdate>,
) -> AppResult<Json<DiningTable>> {
    let repo = DiningTableRepository::new(state.get_db());
    let table = repo.set_status(&id, payload.status).await?;

    state.broadcast_sync(RESOURCE, "updated", &id, Some(&table));

    Ok(Json(table))
}

/// PUT /api/tables/:id/position
pub async fn set_position(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<TablePositionUpdate>,
) -> AppResult<Json<DiningTable>> {
    let repo = DiningTableRepository::new(state.get_db());
    let table = repo
        .set_position(&id, payload.x_position, payload.y_position)
        .await?;

    state.broadcast_sync(RESOURCE, "updated", &id, Some(&table));

    Ok(Json(table))
}

/// POST /api/tables/:id/merge
pub async fn merge(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<TableMergeRequest>,
) -> AppResult<Json<DiningTable>> {
    let repo = DiningTableRepository::new(state.get_db());
    let other_ids = payload
        .other_ids
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>();
    let table = repo.merge(&id, other_ids).await?;

    state.broadcast_sync(RESOURCE, "updated", &id, Some(&table));

    Ok(Json(table))
}

/// POST /api/tables/:id/unmerge
pub async fn unmerge(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DiningTable>> {
    let repo = DiningTableRepository::new(state.get_db());
    let table = repo.unmerge(&id).await?;

    state.broadcast_sync(RESOURCE, "updated", &id, Some(&table));

    Ok(Json(table))
}
