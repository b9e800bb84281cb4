//! Health check API

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/health", get(health))
}

/// GET /api/health - liveness probe
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "challan-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
