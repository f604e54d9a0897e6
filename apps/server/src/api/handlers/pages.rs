//! HTML page handlers and the hospital registration form action

use crate::{
    api::params::parse_id,
    messages,
    pages::{self, HospitalFormView},
    services::{CreateHospitalError, EntryPoint, HospitalDraft},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Form,
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct DirectoryQuery {
    #[serde(default)]
    pub q: Option<String>,
}

/// GET /hospitals
pub async fn hospitals_page(
    State(state): State<AppState>,
    Query(query): Query<DirectoryQuery>,
) -> Response {
    let term = query
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty());

    match state.store.list_hospitals(term).await {
        Ok(hospitals) => pages::hospital_list(&hospitals, term).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load hospital list");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                pages::error_page(messages::HOSPITALS_LOAD_FAILED, Some("/hospitals")),
            )
                .into_response()
        }
    }
}

/// GET /hospitals/:id
pub async fn hospital_page(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let not_found = || {
        (
            StatusCode::NOT_FOUND,
            pages::error_page(messages::HOSPITAL_NOT_FOUND, Some("/hospitals")),
        )
            .into_response()
    };

    let Ok(id) = parse_id(&id, messages::INVALID_HOSPITAL_ID) else {
        return not_found();
    };

    match state.store.find_hospital(id).await {
        Ok(Some(detail)) => pages::hospital_detail(&detail).into_response(),
        Ok(None) => not_found(),
        Err(e) => {
            tracing::error!(error = %e, hospital_id = id, "Failed to load hospital");
            let retry = format!("/hospitals/{id}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                pages::error_page(messages::HOSPITAL_LOAD_FAILED, Some(&retry)),
            )
                .into_response()
        }
    }
}

/// GET /admin
pub async fn admin_home(State(state): State<AppState>) -> Response {
    match state.store.list_requests().await {
        Ok(requests) => pages::admin_requests(&requests).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load visit requests");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                pages::error_page(messages::REQUESTS_LOAD_FAILED, Some("/admin")),
            )
                .into_response()
        }
    }
}

/// GET /admin/hospitals/new
pub async fn new_hospital_page() -> Response {
    pages::hospital_form(HospitalFormView::default()).into_response()
}

/// POST /admin/hospitals
///
/// Re-renders the form: 201 with the new hospital, 422 with the validation
/// message, 500 when the store fails.
pub async fn submit_hospital_form(
    State(state): State<AppState>,
    Form(draft): Form<HospitalDraft>,
) -> Response {
    match state.hospitals.create(draft.clone(), EntryPoint::Form).await {
        Ok(hospital) => (
            StatusCode::CREATED,
            pages::hospital_form(HospitalFormView {
                values: None,
                error: None,
                created: Some(&hospital),
            }),
        )
            .into_response(),
        Err(CreateHospitalError::Invalid(e)) => {
            let message = e.to_string();
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                pages::hospital_form(HospitalFormView {
                    values: Some(&draft),
                    error: Some(&message),
                    created: None,
                }),
            )
                .into_response()
        }
        Err(CreateHospitalError::Store(e)) => {
            tracing::error!(error = %e, "Failed to register hospital from form");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                pages::hospital_form(HospitalFormView {
                    values: Some(&draft),
                    error: Some(messages::HOSPITAL_CREATE_FAILED),
                    created: None,
                }),
            )
                .into_response()
        }
    }
}
