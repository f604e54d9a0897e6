//! JSON API routes, nested under `/api`

use crate::api::handlers::{admin, hospitals, qna, users};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/hospitals/:id", get(hospitals::get_hospital))
        .route("/hospitals/:id/requests", post(hospitals::create_request))
        .route("/qna/:id", get(qna::get_qna))
        .route("/users/:id/reviews", get(users::list_user_reviews))
        // Admin JSON endpoints; reverify checks the admin gate itself
        .route("/admin/requests", get(admin::list_requests))
        .route("/admin/hospitals", post(hospitals::create_hospital))
        .route("/admin/reviews/reverify", post(admin::reverify_reviews))
}
