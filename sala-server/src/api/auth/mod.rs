//! Auth API

mod handler;

use axum::{
    routing::{get, post},
    Router,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/auth", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/sign-in", post(handler::sign_in))
        .route("/sign-up", post(handler::sign_up))
        .route("/me", get(handler::me))
}
