//! Order API
//!
//! Orders plus their line items. Item-level routes live under
//! `/api/order-items` because an item id alone identifies its order.

mod handler;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .nest("/api/orders", order_routes())
        .nest("/api/order-items", item_routes())
}

fn order_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", get(handler::get_detail).delete(handler::delete))
        .route("/{id}/items", post(handler::add_items))
        .route("/{id}/status", put(handler::set_status))
}

fn item_routes() -> Router<ServerState> {
    Router::new().route(
        "/{id}",
        put(handler::update_item_status).delete(handler::delete_item),
    )
}
