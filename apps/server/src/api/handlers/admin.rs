//! Admin API handlers

use crate::{messages, state::AppState, Result};
use axum::{extract::State, http::HeaderMap, Json};
use serde_json::{json, Value};

/// GET /api/admin/requests
pub async fn list_requests(State(state): State<AppState>) -> Result<Json<Value>> {
    let requests = state
        .store
        .list_requests()
        .await
        .map_err(|e| e.or_fallback(messages::REQUESTS_LOAD_FAILED))?;

    Ok(Json(json!({ "requests": requests })))
}

/// POST /api/admin/reviews/reverify
pub async fn reverify_reviews(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>> {
    state.admin.check_admin(&headers).into_result()?;

    let summary = state.reviews.reverify_all().await.map_err(|e| {
        let message = e.public_message();
        if message.trim().is_empty() {
            e.masked(messages::REVERIFY_FAILED)
        } else {
            e.masked(message)
        }
    })?;

    Ok(Json(json!({
        "success": true,
        "message": messages::REVERIFY_SUCCEEDED,
        "result": {
            "total": summary.total,
            "verified": summary.verified,
            "unverified": summary.unverified,
            "changed": summary.changed,
        }
    })))
}
