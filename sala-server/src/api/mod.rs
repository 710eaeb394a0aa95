//! API Routes
//!
//! One module per resource, each exposing a `router()` merged here.
//!
//! - [`health`] - liveness check
//! - [`auth`] - sign-in / sign-up / current profile
//! - [`categories`] - menu categories
//! - [`menu_items`] - menu items, ingredients and availability
//! - [`ingredients`] - ingredient requirement rows
//! - [`inventory`] - stock items and movements
//! - [`tables`] - dining tables, floor plan and merging
//! - [`reservations`] - reservations
//! - [`orders`] - orders and line items
//! - [`waiters`] - staff management (admin)

pub mod auth;
pub mod health;

pub mod categories;
pub mod ingredients;
pub mod inventory;
pub mod menu_items;
pub mod orders;
pub mod reservations;
pub mod tables;
pub mod waiters;

use axum::{middleware, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::require_auth;
use crate::core::ServerState;

/// Assemble the full application router
pub fn create_router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(categories::router())
        .merge(menu_items::router())
        .merge(ingredients::router())
        .merge(inventory::router())
        .merge(tables::router())
        .merge(reservations::router())
        .merge(orders::router())
        .merge(waiters::router())
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
