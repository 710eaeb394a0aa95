//! Auth Handlers

use axum::{extract::State, Extension, Json};
use tracing::info;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{Profile, ProfileCreate, SignInRequest, SignInResponse};
use crate::db::repository::ProfileRepository;
use crate::utils::{AppError, AppResult};
use shared::Role;

/// POST /api/auth/sign-in
pub async fn sign_in(
    State(state): State<ServerState>,
    Json(payload): Json<SignInRequest>,
) -> AppResult<Json<SignInResponse>> {
    let repo = ProfileRepository::new(state.get_db());

    let profile = repo
        .find_by_email(&payload.email)
        .await?
        .ok_or_else(AppError::invalid_credentials)?;
    if !profile.verify_password(&payload.password) {
        return Err(AppError::invalid_credentials());
    }

    let profile_id = profile
        .id
        .as_ref()
        .map(|id| id.to_string())
        .ok_or_else(|| AppError::internal("Profile has no id"))?;
    let token = state
        .jwt_service
        .generate_token(&profile_id, &profile.email, profile.role)
        .map_err(|e| AppError::internal(e.to_string()))?;

    info!(profile = %profile_id, "Signed in");
    Ok(Json(SignInResponse { token, profile }))
}

/// POST /api/auth/sign-up
///
/// Public self-registration creates a waiter profile. The very first
/// profile on a fresh install becomes the admin.
pub async fn sign_up(
    State(state): State<ServerState>,
    Json(payload): Json<ProfileCreate>,
) -> AppResult<Json<SignInResponse>> {
    let repo = ProfileRepository::new(state.get_db());

    let role = if repo.find_all().await?.is_empty() {
        Role::Admin
    } else {
        Role::Waiter
    };
    let profile = repo.create(payload, role).await?;

    let profile_id = profile
        .id
        .as_ref()
        .map(|id| id.to_string())
        .ok_or_else(|| AppError::internal("Profile has no id"))?;
    let token = state
        .jwt_service
        .generate_token(&profile_id, &profile.email, profile.role)
        .map_err(|e| AppError::internal(e.to_string()))?;

    info!(profile = %profile_id, role = %profile.role, "Signed up");
    Ok(Json(SignInResponse { token, profile }))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<Profile>> {
    let repo = ProfileRepository::new(state.get_db());
    let profile = repo
        .find_by_id(&user.id)
        .await?
        .ok_or_else(|| AppError::not_found("Profile not found"))?;
    Ok(Json(profile))
}
