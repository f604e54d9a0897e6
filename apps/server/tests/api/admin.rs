//! Admin API tests
//!
//! - GET /api/admin/requests lists every request newest first
//! - POST /api/admin/reviews/reverify is gated: 401 without a token, 403 for
//!   non-admin tokens, and no review changes on either

use crate::support::{
    admin_bearer, assert_error_body, assert_status, hospital, hospital_at, ids, review,
    token_with_role, visit_request_payload, with_test_app, with_test_app_with_config,
};
use axum::http::StatusCode;
use carefind::messages;
use chrono::{Duration, Utc};
use serde_json::json;

#[tokio::test]
async fn lists_requests_newest_first_with_hospital_summary() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let mut a = hospital_at("A병원", "서울", Utc::now() - Duration::days(1));
            a.name_en = Some("A Hospital".to_string());
            let a = app.store.insert_hospital(a).await;
            let b = app.store.insert_hospital(hospital("B병원", "부산")).await;

            let mut created = Vec::new();
            for h in [&a, &b, &a] {
                let (status, body) = app
                    .post_json(
                        &format!("/api/hospitals/{}/requests", h.id),
                        &visit_request_payload(),
                    )
                    .await?;
                assert_status(status, StatusCode::CREATED, "seed request");
                created.push(body["request"]["id"].as_i64().unwrap());
            }

            let (status, body) = app.get_json("/api/admin/requests").await?;
            assert_status(status, StatusCode::OK, "list requests");

            created.reverse();
            assert_eq!(ids(&body["requests"])?, created);
            assert_eq!(
                body["requests"][0]["hospital"],
                json!({ "id": a.id, "name": "A병원", "nameEn": "A Hospital" })
            );
            assert_eq!(body["requests"][1]["hospital"]["nameEn"], json!(null));
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn empty_inbox_is_an_empty_list() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, body) = app.get_json("/api/admin/requests").await?;
            assert_status(status, StatusCode::OK, "empty inbox");
            assert_eq!(body, json!({ "requests": [] }));
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn reverify_without_token_is_unauthorized_and_changes_nothing() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let user = app.store.insert_user("작성자", None).await;
            let h = app.store.insert_hospital(hospital("A병원", "서울")).await;
            let pending = app
                .store
                .insert_review(review(user.id, h.id, false, Utc::now()))
                .await;

            let (status, body) = app
                .post_json("/api/admin/reviews/reverify", &json!({}))
                .await?;
            assert_status(status, StatusCode::UNAUTHORIZED, "no token");
            assert_eq!(
                assert_error_body(&body, "no token")?,
                messages::LOGIN_REQUIRED
            );
            assert!(!app.store.review(pending.id).await.unwrap().verified);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn reverify_with_non_admin_token_is_forbidden() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let bearer = format!("Bearer {}", token_with_role(Some("member")));
            let (status, body) = app
                .post_json_with_headers(
                    "/api/admin/reviews/reverify",
                    &json!({}),
                    &[("authorization", bearer.as_str())],
                )
                .await?;
            assert_status(status, StatusCode::FORBIDDEN, "member token");
            assert_eq!(
                assert_error_body(&body, "member token")?,
                messages::ADMIN_REQUIRED
            );
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn reverify_with_garbage_token_is_unauthorized() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, _) = app
                .post_json_with_headers(
                    "/api/admin/reviews/reverify",
                    &json!({}),
                    &[("authorization", "Bearer not.a.jwt")],
                )
                .await?;
            assert_status(status, StatusCode::UNAUTHORIZED, "garbage token");
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn reverify_as_admin_updates_flags_and_reports_counts() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let user = app.store.insert_user("작성자", None).await;
            let h = app.store.insert_hospital(hospital("A병원", "서울")).await;
            let gone = app.store.insert_hospital(hospital("폐업병원", "대전")).await;

            let pending = app
                .store
                .insert_review(review(user.id, h.id, false, Utc::now()))
                .await;
            let orphaned = app
                .store
                .insert_review(review(user.id, gone.id, true, Utc::now()))
                .await;
            assert!(app.store.remove_hospital(gone.id).await);

            let bearer = admin_bearer();
            let (status, body) = app
                .post_json_with_headers(
                    "/api/admin/reviews/reverify",
                    &json!({}),
                    &[("authorization", bearer.as_str())],
                )
                .await?;
            assert_status(status, StatusCode::OK, "admin reverify");
            assert_eq!(body["success"], true);
            assert_eq!(body["message"], messages::REVERIFY_SUCCEEDED);
            assert_eq!(body["result"]["total"], 2);
            assert_eq!(body["result"]["verified"], 1);
            assert_eq!(body["result"]["unverified"], 1);

            assert!(app.store.review(pending.id).await.unwrap().verified);
            assert!(!app.store.review(orphaned.id).await.unwrap().verified);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn disabled_gate_lets_reverify_through() -> anyhow::Result<()> {
    with_test_app_with_config(
        |config| config.auth.admin_enabled = false,
        |app| {
            Box::pin(async move {
                let (status, body) = app
                    .post_json("/api/admin/reviews/reverify", &json!({}))
                    .await?;
                assert_status(status, StatusCode::OK, "gate disabled");
                assert_eq!(body["result"]["total"], 0);
                Ok(())
            })
        },
    )
    .await
}
