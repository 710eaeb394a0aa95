//! Menu Item API
//!
//! Includes the per-item ingredient list and the availability check.

mod handler;

use axum::{routing::get, Router};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/menu-items", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/{id}/availability", get(handler::availability))
        .route(
            "/{id}/ingredients",
            get(handler::list_ingredients).post(handler::add_ingredient),
        )
}
