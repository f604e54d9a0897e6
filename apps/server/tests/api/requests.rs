//! Visit request creation tests (POST /api/hospitals/:id/requests)

use crate::support::{
    assert_message_body, assert_status, hospital, visit_request_payload, with_test_app,
};
use axum::http::StatusCode;
use carefind::messages;
use serde_json::json;

#[tokio::test]
async fn creates_request_for_existing_hospital() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let h = app.store.insert_hospital(hospital("A병원", "서울")).await;

            let (status, body) = app
                .post_json(
                    &format!("/api/hospitals/{}/requests", h.id),
                    &visit_request_payload(),
                )
                .await?;
            assert_status(status, StatusCode::CREATED, "create request");
            assert_eq!(body["success"], true);

            let request = &body["request"];
            assert_eq!(request["hospitalId"], h.id);
            assert_eq!(request["type"], "visit");
            assert_eq!(request["name"], "홍길동");
            assert_eq!(request["message"], "오전 진료 희망");
            // +09:00 normalized to UTC
            assert_eq!(request["preferredAt"], "2026-03-01T00:30:00Z");
            assert_eq!(app.store.request_count().await, 1);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn optional_fields_may_be_omitted() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let h = app.store.insert_hospital(hospital("A병원", "서울")).await;

            let (status, body) = app
                .post_json(
                    &format!("/api/hospitals/{}/requests", h.id),
                    &json!({ "type": "contact", "name": "홍길동", "phone": "010" }),
                )
                .await?;
            assert_status(status, StatusCode::CREATED, "minimal request");
            assert!(body["request"]["message"].is_null());
            assert!(body["request"]["preferredAt"].is_null());
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn missing_required_fields_write_nothing() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let h = app.store.insert_hospital(hospital("A병원", "서울")).await;
            let path = format!("/api/hospitals/{}/requests", h.id);

            for field in ["type", "name", "phone"] {
                let mut payload = visit_request_payload();
                payload[field] = json!("  ");
                let (status, body) = app.post_json(&path, &payload).await?;
                assert_status(status, StatusCode::BAD_REQUEST, field);
                assert_eq!(
                    assert_message_body(&body, field)?,
                    messages::REQUEST_FIELDS_REQUIRED
                );

                if let Some(object) = payload.as_object_mut() {
                    object.remove(field);
                }
                let (status, _) = app.post_json(&path, &payload).await?;
                assert_status(status, StatusCode::BAD_REQUEST, field);
            }

            assert_eq!(app.store.request_count().await, 0);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn non_integer_hospital_id_is_bad_request() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, body) = app
                .post_json("/api/hospitals/abc/requests", &visit_request_payload())
                .await?;
            assert_status(status, StatusCode::BAD_REQUEST, "non-integer id");
            assert_eq!(
                assert_message_body(&body, "non-integer id")?,
                messages::INVALID_HOSPITAL_ID
            );
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn unparseable_preferred_at_is_bad_request() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let h = app.store.insert_hospital(hospital("A병원", "서울")).await;
            let mut payload = visit_request_payload();
            payload["preferredAt"] = json!("다음 주 화요일");

            let (status, body) = app
                .post_json(&format!("/api/hospitals/{}/requests", h.id), &payload)
                .await?;
            assert_status(status, StatusCode::BAD_REQUEST, "bad preferredAt");
            assert_eq!(body["message"], messages::REQUEST_PREFERRED_AT_INVALID);
            assert_eq!(app.store.request_count().await, 0);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn unknown_hospital_is_opaque_server_error() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, body) = app
                .post_json("/api/hospitals/424242/requests", &visit_request_payload())
                .await?;
            assert_status(status, StatusCode::INTERNAL_SERVER_ERROR, "unknown hospital");
            assert_eq!(body, json!({ "success": false }));
            Ok(())
        })
    })
    .await
}
