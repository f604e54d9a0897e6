//! API layer - routes, handlers, and middleware

pub mod handlers;
pub mod middleware;
pub mod params;
pub mod routes;

use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, response::Redirect, routing::get, Router};

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    let max_body_size = state.config.server.max_request_body_size;
    let cors_origins = state.config.server.cors_origins.clone();

    let admin_router =
        routes::pages::admin_routes().layer(axum::middleware::from_fn_with_state(
            state.clone(),
            crate::admin_auth::admin_pages_middleware,
        ));

    Router::new()
        .route("/", get(|| async { Redirect::to("/hospitals") }))
        .merge(routes::ops::ops_routes())
        .nest("/api", routes::api::api_routes())
        .merge(routes::pages::public_routes())
        .nest("/admin", admin_router)
        .with_state(state)
        // Applied in reverse order
        .layer(axum::middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(axum::middleware::from_fn(middleware::metrics_middleware))
        .layer(middleware::compression())
        .layer(middleware::cors(&cors_origins))
        .layer(middleware::trace())
        .layer(DefaultBodyLimit::max(max_body_size))
}
