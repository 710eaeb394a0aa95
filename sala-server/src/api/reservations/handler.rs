//! Reservation Handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{Reservation, ReservationCreate, ReservationUpdate};
use crate::db::repository::ReservationRepository;
use crate::utils::{AppError, AppResult};

const RESOURCE: &str = "reservation";

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// "YYYY-MM-DD"
    pub date: Option<String>,
}

/// GET /api/reservations?date=2026-08-26
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Reservation>>> {
    let repo = ReservationRepository::new(state.get_db());
    let reservations = match query.date {
        Some(date) => repo.find_by_date(&date).await?,
        None => repo.find_all().await?,
    };
    Ok(Json(reservations))
}

/// GET /api/reservations/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Reservation>> {
    let repo = ReservationRepository::new(state.get_db());
    let reservation = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Reservation {} not found", id)))?;
    Ok(Json(reservation))
}

/// POST /api/reservations
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ReservationCreate>,
) -> AppResult<Json<Reservation>> {
    let repo = ReservationRepository::new(state.get_db());
    let reservation = repo.create(payload).await?;

    let id = reservation
        .id
        .as_ref()
        .map(|t| t.to_string())
        .unwrap_or_default();
    state.broadcast_sync(RESOURCE, "created", &id, Some(&reservation));

    Ok(Json(reservation))
}

/// PUT /api/reservations/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ReservationUpdate>,
) -> AppResult<Json<Reservation>> {
    let repo = ReservationRepository::new(state.get_db());
    let reservation = repo.update(&id, payload).await?;

    state.broadcast_sync(RESOURCE, "updated", &id, Some(&reservation));

    Ok(Json(reservation))
}

/// DELETE /api/reservations/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = ReservationRepository::new(state.get_db());
    let result = repo.delete(&id).await?;

    if result {
        state.broadcast_sync::<()>(RESOURCE, "deleted", &id, None);
    }

    Ok(Json(result))
}
