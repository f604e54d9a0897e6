//! Hospital and visit request handlers

use crate::{
    api::params::parse_id,
    messages,
    request_context::RequestContext,
    services::{CreateHospitalError, CreateRequestError, EntryPoint, HospitalDraft, VisitRequestPayload},
    state::AppState,
    Error, Result,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

/// GET /api/hospitals/:id
pub async fn get_hospital(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let id = parse_id(&id, messages::INVALID_HOSPITAL_ID)?;

    let hospital = state
        .store
        .find_hospital(id)
        .await
        .map_err(|e| e.or_fallback(messages::HOSPITAL_LOAD_FAILED))?
        .ok_or_else(|| Error::NotFound(messages::HOSPITAL_NOT_FOUND.to_string()))?;

    Ok(Json(json!({ "hospital": hospital })))
}

fn message(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "message": message.into() }))).into_response()
}

/// POST /api/hospitals/:id/requests
///
/// Client errors answer `{message}`; store failures are logged and answered
/// with a bare `{success: false}`.
pub async fn create_request(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
    payload: std::result::Result<Json<VisitRequestPayload>, JsonRejection>,
) -> Response {
    let hospital_id = match parse_id(&id, messages::INVALID_HOSPITAL_ID) {
        Ok(id) => id,
        Err(e) => return message(StatusCode::BAD_REQUEST, e.public_message()),
    };
    let Json(payload) = match payload {
        Ok(p) => p,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected visit request body");
            return message(StatusCode::BAD_REQUEST, messages::INVALID_JSON_BODY);
        }
    };

    match state.visit_requests.create(hospital_id, payload).await {
        Ok(request) => (
            StatusCode::CREATED,
            Json(json!({ "success": true, "request": request })),
        )
            .into_response(),
        Err(CreateRequestError::Invalid(e)) => message(StatusCode::BAD_REQUEST, e.to_string()),
        Err(CreateRequestError::Store(e)) => {
            tracing::error!(
                error = %e,
                hospital_id,
                request_id = %ctx.request_id,
                "Failed to create visit request"
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false })),
            )
                .into_response()
        }
    }
}

fn failure(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(json!({ "success": false, "message": message.into() })),
    )
        .into_response()
}

/// POST /api/admin/hospitals
///
/// JSON twin of the registration form; same validation.
pub async fn create_hospital(
    State(state): State<AppState>,
    payload: std::result::Result<Json<HospitalDraft>, JsonRejection>,
) -> Response {
    let Json(draft) = match payload {
        Ok(d) => d,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected hospital body");
            return failure(StatusCode::BAD_REQUEST, messages::INVALID_JSON_BODY);
        }
    };

    match state.hospitals.create(draft, EntryPoint::Json).await {
        Ok(hospital) => (
            StatusCode::CREATED,
            Json(json!({ "success": true, "hospital": hospital })),
        )
            .into_response(),
        Err(CreateHospitalError::Invalid(e)) => failure(StatusCode::BAD_REQUEST, e.to_string()),
        Err(CreateHospitalError::Store(e)) => {
            tracing::error!(error = %e, "Failed to create hospital");
            failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                messages::HOSPITAL_CREATE_FAILED,
            )
        }
    }
}
