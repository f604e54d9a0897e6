//! User-scoped read handlers

use crate::{api::params::parse_id, messages, state::AppState, Result};
use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

/// GET /api/users/:id/reviews
pub async fn list_user_reviews(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let user_id = parse_id(&id, messages::INVALID_USER_ID)?;

    let reviews = state
        .reviews
        .list_by_user(user_id)
        .await
        .map_err(|e| e.or_fallback(messages::REVIEWS_LOAD_FAILED))?;

    Ok(Json(json!({ "reviews": reviews })))
}
