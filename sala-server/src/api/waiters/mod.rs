//! Staff API
//!
//! Admin-only: listing and creating waiter accounts. Self-registration is
//! `/api/auth/sign-up`.

mod handler;

use axum::{middleware, routing::get, Router};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/waiters", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", axum::routing::delete(handler::delete))
        .layer(middleware::from_fn(require_admin))
}
