//! Health Check Handler

use axum::Json;
use serde_json::{json, Value};

use crate::utils::{ok, AppResponse};

/// GET /api/health
pub async fn health() -> Json<AppResponse<Value>> {
    ok(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
