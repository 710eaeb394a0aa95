//! Ingredient Requirement Handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::ServerState;
use crate::db::models::{MenuItemIngredient, MenuItemIngredientUpdate};
use crate::db::repository::MenuItemIngredientRepository;
use crate::utils::AppResult;

const RESOURCE: &str = "menu_item";

/// PUT /api/ingredients/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MenuItemIngredientUpdate>,
) -> AppResult<Json<MenuItemIngredient>> {
    let repo = MenuItemIngredientRepository::new(state.get_db());
    let row = repo.update(&id, payload).await?;

    let menu_item_id = row.menu_item.to_string();
    state.broadcast_sync(RESOURCE, "updated", &menu_item_id, Some(&row));

    Ok(Json(row))
}

/// DELETE /api/ingredients/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = MenuItemIngredientRepository::new(state.get_db());
    let row = repo.find_by_id(&id).await?;
    let result = repo.delete(&id).await?;

    if result && let Some(row) = row {
        let menu_item_id = row.menu_item.to_string();
        state.broadcast_sync::<()>(RESOURCE, "updated", &menu_item_id, None);
    }

    Ok(Json(result))
}
