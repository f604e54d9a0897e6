//! Operational endpoints: liveness, Prometheus scrape, favicon.

use crate::api::handlers::metrics::metrics_handler;
use crate::state::AppState;
use axum::{http::StatusCode, response::Json, routing::get, Router};
use serde_json::{json, Value};

pub fn ops_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/favicon.ico", get(|| async { StatusCode::NO_CONTENT }))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "carefind"
    }))
}
