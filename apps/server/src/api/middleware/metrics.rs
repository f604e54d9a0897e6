//! Metrics middleware - tracks HTTP request metrics

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

use crate::metrics::{
    method_label, route_label, HTTP_REQUESTS_IN_FLIGHT, HTTP_REQUESTS_TOTAL,
    HTTP_REQUEST_DURATION_SECONDS,
};

/// Count, time and track in-flight requests per method and route template.
///
/// Runs as a `Router::layer`, so the matched route is already in the request
/// extensions; unmatched requests share one label.
pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = method_label(req.method());
    let route = route_label(
        req.extensions()
            .get::<MatchedPath>()
            .map(MatchedPath::as_str),
    )
    .to_string();

    HTTP_REQUESTS_IN_FLIGHT
        .with_label_values(&[method, &route])
        .inc();

    let response = next.run(req).await;

    let status = response.status().as_u16().to_string();
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method, &route, &status])
        .inc();
    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[method, &route])
        .observe(start.elapsed().as_secs_f64());

    HTTP_REQUESTS_IN_FLIGHT
        .with_label_values(&[method, &route])
        .dec();

    response
}
