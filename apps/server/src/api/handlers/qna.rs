//! Q&A board handlers

use crate::{api::params::parse_id, messages, state::AppState, Result};
use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

/// GET /api/qna/:id
///
/// Every successful read counts as one view.
pub async fn get_qna(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let id = parse_id(&id, messages::INVALID_QNA_ID)?;

    let qna = state
        .qna
        .view(id)
        .await
        .map_err(|e| e.or_fallback(messages::QNA_LOAD_FAILED))?;

    Ok(Json(json!({ "qna": qna })))
}
