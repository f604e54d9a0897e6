//! User review listing tests (GET /api/users/:id/reviews)

use crate::support::{assert_error_body, assert_status, hospital, ids, review, with_test_app};
use axum::http::StatusCode;
use carefind::messages;
use chrono::{Duration, Utc};

#[tokio::test]
async fn lists_user_reviews_newest_first_with_hospital() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let author = app.store.insert_user("작성자", None).await;
            let other = app.store.insert_user("다른 사용자", None).await;
            let h = app.store.insert_hospital(hospital("A병원", "서울")).await;

            let now = Utc::now();
            let older = app
                .store
                .insert_review(review(author.id, h.id, true, now - Duration::days(2)))
                .await;
            let newer = app
                .store
                .insert_review(review(author.id, h.id, false, now))
                .await;
            app.store
                .insert_review(review(other.id, h.id, true, now))
                .await;

            let (status, body) = app
                .get_json(&format!("/api/users/{}/reviews", author.id))
                .await?;
            assert_status(status, StatusCode::OK, "user reviews");

            assert_eq!(ids(&body["reviews"])?, vec![newer.id, older.id]);
            let first = &body["reviews"][0];
            assert_eq!(first["hospital"]["id"], h.id);
            assert_eq!(first["hospital"]["name"], "A병원");
            assert_eq!(first["userId"], author.id);
            assert_eq!(first["verified"], false);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn user_without_reviews_gets_empty_list() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, body) = app.get_json("/api/users/77/reviews").await?;
            assert_status(status, StatusCode::OK, "no reviews");
            assert_eq!(body["reviews"], serde_json::json!([]));
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn non_integer_user_id_is_bad_request() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, body) = app.get_json("/api/users/me/reviews").await?;
            assert_status(status, StatusCode::BAD_REQUEST, "non-integer user id");
            assert_eq!(
                assert_error_body(&body, "non-integer user id")?,
                messages::INVALID_USER_ID
            );
            Ok(())
        })
    })
    .await
}
