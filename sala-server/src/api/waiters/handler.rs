//! Staff Handlers

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use tracing::info;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{Profile, ProfileCreate};
use crate::db::repository::ProfileRepository;
use crate::utils::{AppError, AppResult};
use shared::Role;

/// GET /api/waiters
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Profile>>> {
    let repo = ProfileRepository::new(state.get_db());
    Ok(Json(repo.find_all().await?))
}

/// POST /api/waiters
pub async fn create(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<ProfileCreate>,
) -> AppResult<Json<Profile>> {
    let repo = ProfileRepository::new(state.get_db());
    let profile = repo.create(payload, Role::Waiter).await?;

    info!(created_by = %user.id, email = %profile.email, "Waiter account created");
    Ok(Json(profile))
}

/// DELETE /api/waiters/:id
pub async fn delete(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    if user.id == id {
        return Err(AppError::business_rule("Cannot delete your own account"));
    }

    let repo = ProfileRepository::new(state.get_db());
    let profile = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Profile {} not found", id)))?;
    if profile.role.is_admin() {
        return Err(AppError::business_rule("Admin accounts cannot be deleted"));
    }

    let result = repo.delete(&id).await?;
    info!(deleted_by = %user.id, profile = %id, "Waiter account deleted");
    Ok(Json(result))
}
