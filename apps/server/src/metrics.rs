//! Metrics collection for the directory server
//!
//! This module defines and manages Prometheus metrics for monitoring the server.

use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter, register_int_counter_vec, register_int_gauge,
    register_int_gauge_vec, HistogramVec, IntCounter, IntCounterVec, IntGauge, IntGaugeVec,
};

lazy_static! {
    // HTTP Request Metrics

    /// Total HTTP requests by method, path, and status
    pub static ref HTTP_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "carefind_http_requests_total",
        "Total number of HTTP requests",
        &["method", "path", "status"]
    )
    .expect("Failed to register HTTP_REQUESTS_TOTAL");

    /// HTTP request duration in seconds
    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "carefind_http_request_duration_seconds",
        "HTTP request duration in seconds",
        &["method", "path"],
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]
    )
    .expect("Failed to register HTTP_REQUEST_DURATION_SECONDS");

    /// In-flight HTTP requests
    pub static ref HTTP_REQUESTS_IN_FLIGHT: IntGaugeVec = register_int_gauge_vec!(
        "carefind_http_requests_in_flight",
        "Number of HTTP requests currently being processed",
        &["method", "path"]
    )
    .expect("Failed to register HTTP_REQUESTS_IN_FLIGHT");

    // Directory Metrics

    /// Hospitals registered, by entry point (form or json)
    pub static ref HOSPITALS_CREATED_TOTAL: IntCounterVec = register_int_counter_vec!(
        "carefind_hospitals_created_total",
        "Total number of hospitals registered",
        &["entry_point"]
    )
    .expect("Failed to register HOSPITALS_CREATED_TOTAL");

    /// Hospital drafts rejected by validation, by entry point
    pub static ref HOSPITAL_VALIDATION_FAILURES_TOTAL: IntCounterVec = register_int_counter_vec!(
        "carefind_hospital_validation_failures_total",
        "Total number of rejected hospital registrations",
        &["entry_point"]
    )
    .expect("Failed to register HOSPITAL_VALIDATION_FAILURES_TOTAL");

    /// Visit requests created, by request type
    pub static ref VISIT_REQUESTS_CREATED_TOTAL: IntCounterVec = register_int_counter_vec!(
        "carefind_visit_requests_created_total",
        "Total number of visit requests created",
        &["type"]
    )
    .expect("Failed to register VISIT_REQUESTS_CREATED_TOTAL");

    /// Q&A detail views
    pub static ref QNA_VIEWS_TOTAL: IntCounter = register_int_counter!(
        "carefind_qna_views_total",
        "Total number of Q&A detail views"
    )
    .expect("Failed to register QNA_VIEWS_TOTAL");

    /// Reviews processed by re-verification
    pub static ref REVIEWS_REVERIFIED_TOTAL: IntCounter = register_int_counter!(
        "carefind_reviews_reverified_total",
        "Total number of reviews processed by re-verification"
    )
    .expect("Failed to register REVIEWS_REVERIFIED_TOTAL");

    // Database Metrics

    /// Active database connections
    pub static ref DB_CONNECTIONS_ACTIVE: IntGauge = register_int_gauge!(
        "carefind_db_connections_active",
        "Number of active database connections"
    )
    .expect("Failed to register DB_CONNECTIONS_ACTIVE");

    /// Idle database connections
    pub static ref DB_CONNECTIONS_IDLE: IntGauge = register_int_gauge!(
        "carefind_db_connections_idle",
        "Number of idle database connections"
    )
    .expect("Failed to register DB_CONNECTIONS_IDLE");
}

/// Route label for requests that matched no route.
pub const UNMATCHED_ROUTE: &str = "unmatched";

/// Route template (`/api/hospitals/:id`) for matched requests. Raw paths
/// never become label values.
pub fn route_label(matched_path: Option<&str>) -> &str {
    matched_path.unwrap_or(UNMATCHED_ROUTE)
}

/// Standard methods keep their name; extension methods share one bucket.
pub fn method_label(method: &axum::http::Method) -> &'static str {
    use axum::http::Method;

    match *method {
        Method::GET => "GET",
        Method::POST => "POST",
        Method::PUT => "PUT",
        Method::DELETE => "DELETE",
        Method::PATCH => "PATCH",
        Method::HEAD => "HEAD",
        Method::OPTIONS => "OPTIONS",
        _ => "OTHER",
    }
}

/// Visit request types come from the client, so only known ones get their
/// own series.
pub fn request_type_label(kind: &str) -> &'static str {
    match kind.trim().to_ascii_lowercase().as_str() {
        "visit" => "visit",
        "contact" => "contact",
        _ => "other",
    }
}

/// Top-level resource a path belongs to (`hospitals`, `qna`, ...)
pub fn extract_resource(path: &str) -> Option<String> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
        ["api", "admin", resource, ..] => Some(format!("admin.{resource}")),
        ["api", resource, ..] => Some((*resource).to_string()),
        ["admin", ..] => Some("admin".to_string()),
        [first, ..] if *first != "health" && *first != "metrics" => Some((*first).to_string()),
        _ => None,
    }
}
