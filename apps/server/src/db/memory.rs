//! In-memory directory store
//!
//! Used for local development (`--memory`) and by the test-suite. All data
//! lives behind one `RwLock`, so every trait method is atomic with respect
//! to the others.

use crate::{
    db::DirectoryStore,
    models::{
        Department, Hospital, HospitalDetail, HospitalLabel, HospitalSummary, NewHospital,
        NewVisitRequest, Qna, QnaWithAuthor, RequestWithHospital, Review, ReviewWithHospital,
        User, UserSummary, VisitRequest,
    },
    Error, Result,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::{
    collections::{BTreeMap, BTreeSet},
    sync::Arc,
};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Tables {
    next_id: i64,
    hospitals: BTreeMap<i64, Hospital>,
    departments: BTreeMap<i64, Department>,
    hospital_departments: BTreeSet<(i64, i64)>,
    requests: BTreeMap<i64, VisitRequest>,
    reviews: BTreeMap<i64, Review>,
    qnas: BTreeMap<i64, Qna>,
    users: BTreeMap<i64, User>,
}

impl Tables {
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectoryStore {
    tables: Arc<RwLock<Tables>>,
}

/// Newest first, ties broken by id so ordering is stable.
fn newest_first<T>(items: &mut [T], key: impl Fn(&T) -> (DateTime<Utc>, i64)) {
    items.sort_by(|a, b| key(b).cmp(&key(a)));
}

impl InMemoryDirectoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_hospital(&self, mut hospital: Hospital) -> Hospital {
        let mut tables = self.tables.write().await;
        hospital.id = tables.allocate_id();
        tables.hospitals.insert(hospital.id, hospital.clone());
        hospital
    }

    pub async fn insert_department(&self, name: &str) -> Department {
        let mut tables = self.tables.write().await;
        let department = Department {
            id: tables.allocate_id(),
            name: name.to_string(),
        };
        tables
            .departments
            .insert(department.id, department.clone());
        department
    }

    pub async fn link_department(&self, hospital_id: i64, department_id: i64) {
        self.tables
            .write()
            .await
            .hospital_departments
            .insert((hospital_id, department_id));
    }

    pub async fn insert_user(&self, name: &str, image: Option<&str>) -> User {
        let mut tables = self.tables.write().await;
        let user = User {
            id: tables.allocate_id(),
            name: name.to_string(),
            email: None,
            image: image.map(str::to_string),
        };
        tables.users.insert(user.id, user.clone());
        user
    }

    pub async fn insert_qna(&self, user_id: i64, title: &str, content: &str) -> Qna {
        let mut tables = self.tables.write().await;
        let qna = Qna {
            id: tables.allocate_id(),
            title: title.to_string(),
            content: content.to_string(),
            view_count: 0,
            user_id,
            created_at: Utc::now(),
        };
        tables.qnas.insert(qna.id, qna.clone());
        qna
    }

    pub async fn insert_review(&self, mut review: Review) -> Review {
        let mut tables = self.tables.write().await;
        review.id = tables.allocate_id();
        tables.reviews.insert(review.id, review.clone());
        review
    }

    pub async fn remove_hospital(&self, id: i64) -> bool {
        self.tables.write().await.hospitals.remove(&id).is_some()
    }

    pub async fn remove_qna(&self, id: i64) -> bool {
        self.tables.write().await.qnas.remove(&id).is_some()
    }

    pub async fn qna(&self, id: i64) -> Option<Qna> {
        self.tables.read().await.qnas.get(&id).cloned()
    }

    pub async fn review(&self, id: i64) -> Option<Review> {
        self.tables.read().await.reviews.get(&id).cloned()
    }

    pub async fn request_count(&self) -> usize {
        self.tables.read().await.requests.len()
    }

    pub async fn hospital_count(&self) -> usize {
        self.tables.read().await.hospitals.len()
    }
}

#[async_trait]
impl DirectoryStore for InMemoryDirectoryStore {
    async fn list_hospitals(&self, query: Option<&str>) -> Result<Vec<Hospital>> {
        let needle = query
            .map(|q| q.trim().to_lowercase())
            .filter(|q| !q.is_empty());
        let tables = self.tables.read().await;

        let mut hospitals: Vec<Hospital> = tables
            .hospitals
            .values()
            .filter(|h| match &needle {
                None => true,
                Some(needle) => {
                    h.name.to_lowercase().contains(needle)
                        || h.address.to_lowercase().contains(needle)
                        || h
                            .name_en
                            .as_deref()
                            .is_some_and(|en| en.to_lowercase().contains(needle))
                }
            })
            .cloned()
            .collect();
        newest_first(&mut hospitals, |h| (h.created_at, h.id));
        Ok(hospitals)
    }

    async fn find_hospital(&self, id: i64) -> Result<Option<HospitalDetail>> {
        let tables = self.tables.read().await;
        let Some(hospital) = tables.hospitals.get(&id).cloned() else {
            return Ok(None);
        };

        let mut departments: Vec<Department> = tables
            .hospital_departments
            .iter()
            .filter(|(hospital_id, _)| *hospital_id == id)
            .filter_map(|(_, department_id)| tables.departments.get(department_id).cloned())
            .collect();
        departments.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

        Ok(Some(HospitalDetail {
            hospital,
            departments,
        }))
    }

    async fn create_hospital(&self, hospital: NewHospital) -> Result<Hospital> {
        let mut tables = self.tables.write().await;
        let created = Hospital {
            id: tables.allocate_id(),
            name: hospital.name,
            name_en: None,
            address: hospital.address,
            phone: hospital.phone,
            image_url: None,
            created_at: Utc::now(),
        };
        tables.hospitals.insert(created.id, created.clone());
        Ok(created)
    }

    async fn list_requests(&self) -> Result<Vec<RequestWithHospital>> {
        let tables = self.tables.read().await;
        let mut requests: Vec<RequestWithHospital> = tables
            .requests
            .values()
            .filter_map(|request| {
                // Inner join, as in the SQL backend.
                tables
                    .hospitals
                    .get(&request.hospital_id)
                    .map(|hospital| RequestWithHospital {
                        request: request.clone(),
                        hospital: HospitalSummary::from(hospital),
                    })
            })
            .collect();
        newest_first(&mut requests, |r| (r.request.created_at, r.request.id));
        Ok(requests)
    }

    async fn create_request(&self, request: NewVisitRequest) -> Result<VisitRequest> {
        let mut tables = self.tables.write().await;
        if !tables.hospitals.contains_key(&request.hospital_id) {
            return Err(Error::Internal(format!(
                "Foreign key violation: hospital {} does not exist",
                request.hospital_id
            )));
        }

        let created = VisitRequest {
            id: tables.allocate_id(),
            hospital_id: request.hospital_id,
            kind: request.kind,
            name: request.name,
            phone: request.phone,
            message: request.message,
            preferred_at: request.preferred_at,
            created_at: Utc::now(),
        };
        tables.requests.insert(created.id, created.clone());
        Ok(created)
    }

    async fn increment_qna_views(&self, id: i64) -> Result<Option<QnaWithAuthor>> {
        let mut tables = self.tables.write().await;
        let Some(user_id) = tables.qnas.get(&id).map(|q| q.user_id) else {
            return Ok(None);
        };
        let Some(user) = tables.users.get(&user_id).map(UserSummary::from) else {
            return Err(Error::Internal(format!(
                "Q&A {id} references missing user {user_id}"
            )));
        };

        let Some(qna) = tables.qnas.get_mut(&id) else {
            return Ok(None);
        };
        qna.view_count += 1;

        Ok(Some(QnaWithAuthor {
            qna: qna.clone(),
            user,
        }))
    }

    async fn list_reviews_by_user(&self, user_id: i64) -> Result<Vec<ReviewWithHospital>> {
        let tables = self.tables.read().await;
        let mut reviews: Vec<ReviewWithHospital> = tables
            .reviews
            .values()
            .filter(|r| r.user_id == user_id)
            .filter_map(|review| {
                // Inner join: reviews of removed hospitals drop out.
                tables
                    .hospitals
                    .get(&review.hospital_id)
                    .map(|h| ReviewWithHospital {
                        review: review.clone(),
                        hospital: HospitalLabel::from(h),
                    })
            })
            .collect();
        newest_first(&mut reviews, |r| (r.review.created_at, r.review.id));
        Ok(reviews)
    }

    async fn list_reviews(&self) -> Result<Vec<Review>> {
        let tables = self.tables.read().await;
        let mut reviews: Vec<Review> = tables.reviews.values().cloned().collect();
        reviews.sort_by_key(|r| (r.created_at, r.id));
        Ok(reviews)
    }

    async fn set_review_verified(&self, review_id: i64, verified: bool) -> Result<()> {
        let mut tables = self.tables.write().await;
        let review = tables
            .reviews
            .get_mut(&review_id)
            .ok_or_else(|| Error::NotFound(format!("Review {review_id}")))?;
        review.verified = verified;
        Ok(())
    }

    async fn hospital_exists(&self, id: i64) -> Result<bool> {
        Ok(self.tables.read().await.hospitals.contains_key(&id))
    }

    async fn user_exists(&self, id: i64) -> Result<bool> {
        Ok(self.tables.read().await.users.contains_key(&id))
    }
}

/// Fill an empty store with a small demo directory.
pub async fn seed_demo(store: &InMemoryDirectoryStore) -> Result<()> {
    let now = Utc::now();
    let internal = store.insert_department("내과").await;
    let surgery = store.insert_department("외과").await;
    let pediatrics = store.insert_department("소아청소년과").await;

    let seoul = store
        .insert_hospital(Hospital {
            id: 0,
            name: "서울중앙병원".to_string(),
            name_en: Some("Seoul Central Hospital".to_string()),
            address: "서울특별시 중구 을지로 245".to_string(),
            phone: Some("02-123-4567".to_string()),
            image_url: None,
            created_at: now,
        })
        .await;
    let busan = store
        .insert_hospital(Hospital {
            id: 0,
            name: "부산해운대병원".to_string(),
            name_en: Some("Busan Haeundae Hospital".to_string()),
            address: "부산광역시 해운대구 해운대로 100".to_string(),
            phone: None,
            image_url: None,
            created_at: now,
        })
        .await;

    store.link_department(seoul.id, internal.id).await;
    store.link_department(seoul.id, surgery.id).await;
    store.link_department(busan.id, pediatrics.id).await;

    let user = store.insert_user("김민지", None).await;
    store
        .insert_qna(user.id, "야간 진료가 가능한 병원이 있나요?", "중구 근처에서 찾고 있습니다.")
        .await;
    store
        .insert_review(Review {
            id: 0,
            user_id: user.id,
            hospital_id: seoul.id,
            rating: Some(5),
            content: Some("친절하게 진료해주셨어요.".to_string()),
            verified: false,
            created_at: now,
        })
        .await;

    tracing::info!(
        hospitals = store.hospital_count().await,
        "Seeded in-memory directory with demo data"
    );
    Ok(())
}
