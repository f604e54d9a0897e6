use carefind::{
    admin_auth::AdminClaims,
    db::InMemoryDirectoryStore,
    models::{Department, Hospital, Qna, Review, User},
};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::{json, Value};

use super::TEST_JWT_SECRET;

/// Signed HS256 token with the given `role` claim.
pub fn token_with_role(role: Option<&str>) -> String {
    let claims = AdminClaims {
        sub: "admin-user".to_string(),
        role: role.map(String::from),
        exp: (Utc::now() + Duration::hours(1)).timestamp() as usize,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .expect("encode test token")
}

/// `Authorization` header value for an administrator.
pub fn admin_bearer() -> String {
    format!("Bearer {}", token_with_role(Some("admin")))
}

pub fn hospital(name: &str, address: &str) -> Hospital {
    hospital_at(name, address, Utc::now())
}

pub fn hospital_at(name: &str, address: &str, created_at: DateTime<Utc>) -> Hospital {
    Hospital {
        id: 0,
        name: name.to_string(),
        name_en: None,
        address: address.to_string(),
        phone: None,
        image_url: None,
        created_at,
    }
}

/// Hospital with two departments linked through the join table.
pub async fn seed_hospital_with_departments(
    store: &InMemoryDirectoryStore,
) -> (Hospital, Vec<Department>) {
    let mut seoul = hospital("서울중앙병원", "서울특별시 중구 을지로 245");
    seoul.name_en = Some("Seoul Central Hospital".to_string());
    seoul.phone = Some("02-123-4567".to_string());
    let seoul = store.insert_hospital(seoul).await;

    let internal = store.insert_department("내과").await;
    let surgery = store.insert_department("외과").await;
    store.link_department(seoul.id, internal.id).await;
    store.link_department(seoul.id, surgery.id).await;

    (seoul, vec![internal, surgery])
}

pub async fn seed_qna(store: &InMemoryDirectoryStore) -> (User, Qna) {
    let user = store
        .insert_user("김민지", Some("https://img.example/u.png"))
        .await;
    let qna = store
        .insert_qna(user.id, "야간 진료 문의", "중구 근처 병원을 찾습니다.")
        .await;
    (user, qna)
}

pub fn review(user_id: i64, hospital_id: i64, verified: bool, created_at: DateTime<Utc>) -> Review {
    Review {
        id: 0,
        user_id,
        hospital_id,
        rating: Some(4),
        content: Some("친절했어요".to_string()),
        verified,
        created_at,
    }
}

pub fn visit_request_payload() -> Value {
    json!({
        "type": "visit",
        "name": "홍길동",
        "phone": "010-1234-5678",
        "message": "오전 진료 희망",
        "preferredAt": "2026-03-01T09:30:00+09:00"
    })
}
