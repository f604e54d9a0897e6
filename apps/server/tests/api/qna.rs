//! Q&A detail tests (GET /api/qna/:id)

use crate::support::{assert_error_body, assert_status, seed_qna, with_test_app};
use axum::http::StatusCode;
use carefind::messages;

#[tokio::test]
async fn each_read_counts_exactly_one_view() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (user, qna) = seed_qna(&app.store).await;
            let path = format!("/api/qna/{}", qna.id);

            for expected in 1..=3 {
                let (status, body) = app.get_json(&path).await?;
                assert_status(status, StatusCode::OK, "read qna");
                assert_eq!(body["qna"]["viewCount"], expected);
                assert_eq!(body["qna"]["title"], "야간 진료 문의");
                assert_eq!(body["qna"]["user"]["id"], user.id);
                assert_eq!(body["qna"]["user"]["name"], "김민지");
                assert_eq!(body["qna"]["user"]["image"], "https://img.example/u.png");
            }

            assert_eq!(app.store.qna(qna.id).await.unwrap().view_count, 3);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn concurrent_reads_lose_no_views() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (_, qna) = seed_qna(&app.store).await;
            let path = format!("/api/qna/{}", qna.id);

            let results =
                futures::future::join_all((0..25).map(|_| app.get_json(&path))).await;
            for result in results {
                let (status, _) = result?;
                assert_status(status, StatusCode::OK, "concurrent read");
            }

            assert_eq!(app.store.qna(qna.id).await.unwrap().view_count, 25);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn missing_post_is_not_found() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, body) = app.get_json("/api/qna/31337").await?;
            assert_status(status, StatusCode::NOT_FOUND, "missing qna");
            assert_eq!(assert_error_body(&body, "missing qna")?, messages::QNA_NOT_FOUND);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn deleted_post_is_not_found_and_untouched() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (_, qna) = seed_qna(&app.store).await;
            assert!(app.store.remove_qna(qna.id).await);

            let (status, _) = app.get_json(&format!("/api/qna/{}", qna.id)).await?;
            assert_status(status, StatusCode::NOT_FOUND, "deleted qna");
            assert!(app.store.qna(qna.id).await.is_none());
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn non_integer_id_is_bad_request() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, body) = app.get_json("/api/qna/first").await?;
            assert_status(status, StatusCode::BAD_REQUEST, "non-integer qna id");
            assert_eq!(
                assert_error_body(&body, "non-integer qna id")?,
                messages::INVALID_QNA_ID
            );
            Ok(())
        })
    })
    .await
}
