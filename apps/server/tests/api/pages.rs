//! HTML pages and operational endpoints

use crate::support::{
    admin_bearer, assert_error_alert, assert_status, seed_hospital_with_departments,
    token_with_role, with_test_app,
};
use axum::http::{Method, StatusCode};
use carefind::{admin_auth::ADMIN_TOKEN_COOKIE, messages};

#[tokio::test]
async fn directory_highlights_search_term() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            seed_hospital_with_departments(&app.store).await;

            let (status, html) = app.get_html("/hospitals?q=central", &[]).await?;
            assert_status(status, StatusCode::OK, "search");
            assert!(html.contains("Seoul <mark>Central</mark> Hospital"));
            // No image URL, so the card shows the placeholder
            assert!(html.contains(carefind_ui::PLACEHOLDER_GLYPH));

            let (_, html) = app.get_html("/hospitals?q=%EB%B6%80%EC%82%B0", &[]).await?;
            assert!(html.contains("검색 결과가 없습니다."));
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn detail_page_and_not_found_page() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (hospital, _) = seed_hospital_with_departments(&app.store).await;

            let (status, html) = app
                .get_html(&format!("/hospitals/{}", hospital.id), &[])
                .await?;
            assert_status(status, StatusCode::OK, "detail page");
            assert!(html.contains("<li>내과</li>"));

            let (status, html) = app.get_html("/hospitals/999999", &[]).await?;
            assert_status(status, StatusCode::NOT_FOUND, "missing detail page");
            assert_error_alert(&html, messages::HOSPITAL_NOT_FOUND);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn admin_pages_are_gated() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, html) = app.get_html("/admin", &[]).await?;
            assert_status(status, StatusCode::UNAUTHORIZED, "anonymous admin");
            assert_error_alert(&html, messages::LOGIN_REQUIRED);

            let member = format!("Bearer {}", token_with_role(Some("member")));
            let (status, _) = app
                .get_html("/admin", &[("authorization", member.as_str())])
                .await?;
            assert_status(status, StatusCode::FORBIDDEN, "member admin");

            let cookie = format!("{ADMIN_TOKEN_COOKIE}={}", token_with_role(Some("admin")));
            let (status, html) = app.get_html("/admin", &[("cookie", cookie.as_str())]).await?;
            assert_status(status, StatusCode::OK, "admin via cookie");
            assert!(html.contains("접수된 요청이 없습니다."));

            let bearer = admin_bearer();
            let (status, html) = app
                .get_html("/admin/hospitals/new", &[("authorization", bearer.as_str())])
                .await?;
            assert_status(status, StatusCode::OK, "registration form");
            assert!(html.contains(r#"action="/admin/hospitals""#));
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn health_and_metrics() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, body) = app.get_json("/health").await?;
            assert_status(status, StatusCode::OK, "health");
            assert_eq!(body["status"], "ok");

            // Generate one labelled request first
            app.get_json("/api/hospitals/1").await?;

            let (status, headers, body) = app.request(Method::GET, "/metrics", None).await?;
            assert_status(status, StatusCode::OK, "metrics");
            assert!(headers["content-type"]
                .to_str()?
                .starts_with("text/plain"));
            let text = String::from_utf8(body.to_vec())?;
            assert!(text.contains("carefind_http_requests_total"));
            assert!(text.contains("/api/hospitals/{id}"));
            assert!(text.contains("carefind_build_info"));
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn responses_carry_request_id_and_security_headers() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (_, headers, _) = app
                .request_with_extra_headers(
                    Method::GET,
                    "/health",
                    None,
                    &[("x-request-id", "client-123")],
                )
                .await?;
            let request_id = headers["x-request-id"].to_str()?;
            assert_ne!(request_id, "client-123");
            assert_eq!(headers["x-correlation-id"], "client-123");
            assert_eq!(headers["x-content-type-options"], "nosniff");
            assert!(headers.contains_key("content-security-policy"));
            Ok(())
        })
    })
    .await
}
