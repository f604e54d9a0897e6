//! Prometheus scrape endpoint

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use prometheus::{Encoder, TextEncoder};

use crate::state::AppState;

/// Registry metrics in text exposition format, followed by the build info
/// line. Pool gauges are refreshed on every scrape.
pub async fn metrics_handler(State(state): State<AppState>) -> Response {
    state.metrics_service.update_db_connection_metrics();

    let encoder = TextEncoder::new();
    let mut body = Vec::new();
    if let Err(e) = encoder.encode(&prometheus::gather(), &mut body) {
        tracing::error!(error = %e, "Failed to encode metrics");
        return (StatusCode::INTERNAL_SERVER_ERROR, "failed to encode metrics").into_response();
    }

    body.extend_from_slice(
        state
            .metrics_service
            .collect_custom_metrics(env!("CARGO_PKG_VERSION"))
            .as_bytes(),
    );

    (
        [(header::CONTENT_TYPE, encoder.format_type().to_string())],
        body,
    )
        .into_response()
}
