//! Ingredient Requirement API
//!
//! Update/delete for individual requirement rows; creation and listing
//! live under `/api/menu-items/{id}/ingredients`.

mod handler;

use axum::{routing::put, Router};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/ingredients", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/{id}", put(handler::update).delete(handler::delete))
}
