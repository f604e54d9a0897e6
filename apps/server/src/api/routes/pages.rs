//! HTML page routes

use crate::api::handlers::pages;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// Public directory pages.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/hospitals", get(pages::hospitals_page))
        .route("/hospitals/:id", get(pages::hospital_page))
}

/// Admin area, nested under `/admin` behind the admin gate.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::admin_home))
        .route("/hospitals/new", get(pages::new_hospital_page))
        .route("/hospitals", post(pages::submit_hospital_form))
}
