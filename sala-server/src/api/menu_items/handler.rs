//! Menu Item Handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::catalog::AvailabilityService;
use crate::core::ServerState;
use crate::db::models::{
    IngredientWithStock, MenuItem, MenuItemCreate, MenuItemIngredient, MenuItemIngredientCreate,
    MenuItemUpdate,
};
use crate::db::repository::{parse_record_id, MenuItemIngredientRepository, MenuItemRepository};
use crate::utils::{AppError, AppResult};
use shared::AvailabilityReport;

const RESOURCE: &str = "menu_item";

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
}

/// GET /api/menu-items?category=menu_category:x
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<MenuItem>>> {
    let repo = MenuItemRepository::new(state.get_db());
    let items = match query.category {
        Some(category) => repo.find_by_category(&category).await?,
        None => repo.find_all().await?,
    };
    Ok(Json(items))
}

/// GET /api/menu-items/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MenuItem>> {
    let repo = MenuItemRepository::new(state.get_db());
    let item = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Menu item {} not found", id)))?;
    Ok(Json(item))
}

/// POST /api/menu-items
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<Json<MenuItem>> {
    let repo = MenuItemRepository::new(state.get_db());
    let item = repo.create(payload).await?;

    let id = item.id.as_ref().map(|t| t.to_string()).unwrap_or_default();
    state.broadcast_sync(RESOURCE, "created", &id, Some(&item));

    Ok(Json(item))
}

/// PUT /api/menu-items/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MenuItemUpdate>,
) -> AppResult<Json<MenuItem>> {
    let repo = MenuItemRepository::new(state.get_db());
    let item = repo.update(&id, payload).await?;

    state.broadcast_sync(RESOURCE, "updated", &id, Some(&item));

    Ok(Json(item))
}

/// DELETE /api/menu-items/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = MenuItemRepository::new(state.get_db());
    let result = repo.delete(&id).await?;

    if result {
        state.broadcast_sync::<()>(RESOURCE, "deleted", &id, None);
    }

    Ok(Json(result))
}

/// GET /api/menu-items/:id/availability
pub async fn availability(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AvailabilityReport>> {
    let menu_repo = MenuItemRepository::new(state.get_db());
    menu_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Menu item {} not found", id)))?;

    let service = AvailabilityService::new(MenuItemIngredientRepository::new(state.get_db()));
    Ok(Json(service.check_menu_item(&id).await?))
}

/// GET /api/menu-items/:id/ingredients
pub async fn list_ingredients(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<IngredientWithStock>>> {
    let repo = MenuItemIngredientRepository::new(state.get_db());
    Ok(Json(repo.find_for_menu_item_with_stock(&id).await?))
}

#[derive(Debug, Deserialize)]
pub struct AddIngredientRequest {
    pub inventory_item: String,
    pub quantity: f64,
    pub unit: String,
}

/// POST /api/menu-items/:id/ingredients
pub async fn add_ingredient(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<AddIngredientRequest>,
) -> AppResult<Json<MenuItemIngredient>> {
    let menu_item = parse_record_id(&id)?;
    let inventory_item = parse_record_id(&payload.inventory_item)?;

    let repo = MenuItemIngredientRepository::new(state.get_db());
    let row = repo
        .create(MenuItemIngredientCreate {
            menu_item,
            inventory_item,
            quantity: payload.quantity,
            unit: payload.unit,
        })
        .await?;

    state.broadcast_sync(RESOURCE, "updated", &id, Some(&row));

    Ok(Json(row))
}
