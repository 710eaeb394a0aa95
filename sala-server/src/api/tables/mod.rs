//! Dining Table API
//!
//! CRUD plus the floor-plan operations: status, position, merge/unmerge.

mod handler;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/tables", routes())
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
        .route("/{id}/status", put(handler::set_status))
        .route("/{id}/position", put(handler::set_position))
        .route("/{id}/merge", post(handler::merge))
        .route("/{id}/unmerge", post(handler::unmerge))
}
