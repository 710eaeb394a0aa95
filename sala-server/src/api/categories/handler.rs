//! Menu Category Handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{MenuCategory, MenuCategoryCreate, MenuCategoryUpdate};
use crate::db::repository::CategoryRepository;
use crate::utils::{AppError, AppResult};

const RESOURCE: &str = "menu_category";

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Include deactivated categories (management views)
    #[serde(default)]
    pub include_inactive: bool,
}

/// GET /api/categories?include_inactive=true
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<MenuCategory>>> {
    let repo = CategoryRepository::new(state.get_db());
    let categories = if query.include_inactive {
        repo.find_all_with_inactive().await?
    } else {
        repo.find_all().await?
    };
    Ok(Json(categories))
}

/// GET /api/categories/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MenuCategory>> {
    let repo = CategoryRepository::new(state.get_db());
    let category = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Category {} not found", id)))?;
    Ok(Json(category))
}

/// POST /api/categories
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuCategoryCreate>,
) -> AppResult<Json<MenuCategory>> {
    let repo = CategoryRepository::new(state.get_db());
    let category = repo.create(payload).await?;

    let id = category.id.as_ref().map(|t| t.to_string()).unwrap_or_default();
    state.broadcast_sync(RESOURCE, "created", &id, Some(&category));

    Ok(Json(category))
}

/// PUT /api/categories/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MenuCategoryUpdate>,
) -> AppResult<Json<MenuCategory>> {
    let repo = CategoryRepository::new(state.get_db());
    let category = repo.update(&id, payload).await?;

    state.broadcast_sync(RESOURCE, "updated", &id, Some(&category));

    Ok(Json(category))
}

/// DELETE /api/categories/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = CategoryRepository::new(state.get_db());
    let result = repo.delete(&id).await?;

    if result {
        state.broadcast_sync::<()>(RESOURCE, "deleted", &id, None);
    }

    Ok(Json(result))
}
