//! Metrics label tests
//!
//! Label values come from route templates and closed sets, never from raw
//! paths or request bodies.

use crate::support::{assert_status, hospital, visit_request_payload, with_test_app};
use axum::http::{Method, StatusCode};

async fn scrape(app: &crate::support::TestApp) -> anyhow::Result<String> {
    let (status, _headers, body) = app.request(Method::GET, "/metrics", None).await?;
    assert_status(status, StatusCode::OK, "scrape");
    Ok(String::from_utf8(body.to_vec())?)
}

#[tokio::test]
async fn http_metrics_use_route_templates() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            for i in 0..5 {
                let (status, _) = app.get_json(&format!("/api/qna/junk-label-{i}")).await?;
                assert_status(status, StatusCode::BAD_REQUEST, "junk qna id");
                let (status, _, _) = app
                    .request(Method::GET, &format!("/no-such-page-{i}"), None)
                    .await?;
                assert_status(status, StatusCode::NOT_FOUND, "unknown route");
            }

            let text = scrape(app).await?;
            assert!(!text.contains("junk-label"), "raw path leaked into labels");
            assert!(!text.contains("no-such-page"), "raw path leaked into labels");
            assert!(text.contains(r#"path="/api/qna/:id""#));
            assert!(text.contains(r#"path="unmatched""#));
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn visit_request_types_collapse_into_known_buckets() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let h = app.store.insert_hospital(hospital("A병원", "서울")).await;
            let path = format!("/api/hospitals/{}/requests", h.id);

            for i in 0..5 {
                let mut payload = visit_request_payload();
                payload["type"] = serde_json::json!(format!("free-form-type-{i}"));
                let (status, _) = app.post_json(&path, &payload).await?;
                assert_status(status, StatusCode::CREATED, "free-form type");
            }

            let text = scrape(app).await?;
            assert!(!text.contains("free-form-type"), "request type leaked into labels");
            assert!(text.contains(r#"carefind_visit_requests_created_total{type="other"}"#));
            Ok(())
        })
    })
    .await
}
