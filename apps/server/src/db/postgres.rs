//! PostgreSQL directory store
//!
//! Expects the directory schema (`hospitals`, `departments`,
//! `hospital_departments`, `requests`, `reviews`, `qnas`, `users`) to exist;
//! the schema itself is managed outside this service.

use crate::{
    db::DirectoryStore,
    models::{
        Department, Hospital, HospitalDetail, HospitalLabel, HospitalSummary, NewHospital,
        NewVisitRequest, Qna, QnaWithAuthor, RequestWithHospital, Review, ReviewWithHospital,
        UserSummary, VisitRequest,
    },
    Result,
};
use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};

/// Directory store backed by a PostgreSQL pool
#[derive(Debug, Clone)]
pub struct PostgresDirectoryStore {
    pool: PgPool,
}

impl PostgresDirectoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

const HOSPITAL_COLUMNS: &str = "id, name, name_en, address, phone, image_url, created_at";
const REQUEST_COLUMNS: &str =
    r#"r.id, r.hospital_id, r."type", r.name, r.phone, r.message, r.preferred_at, r.created_at"#;
const REVIEW_COLUMNS: &str =
    "r.id, r.user_id, r.hospital_id, r.rating, r.content, r.verified, r.created_at";

fn hospital_from_row(row: &PgRow) -> Hospital {
    Hospital {
        id: row.get("id"),
        name: row.get("name"),
        name_en: row.get("name_en"),
        address: row.get("address"),
        phone: row.get("phone"),
        image_url: row.get("image_url"),
        created_at: row.get("created_at"),
    }
}

fn request_from_row(row: &PgRow) -> VisitRequest {
    VisitRequest {
        id: row.get("id"),
        hospital_id: row.get("hospital_id"),
        kind: row.get("type"),
        name: row.get("name"),
        phone: row.get("phone"),
        message: row.get("message"),
        preferred_at: row.get("preferred_at"),
        created_at: row.get("created_at"),
    }
}

fn review_from_row(row: &PgRow) -> Review {
    Review {
        id: row.get("id"),
        user_id: row.get("user_id"),
        hospital_id: row.get("hospital_id"),
        rating: row.get("rating"),
        content: row.get("content"),
        verified: row.get("verified"),
        created_at: row.get("created_at"),
    }
}

/// Escape LIKE metacharacters so user input only matches literally.
fn like_pattern(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len() + 2);
    escaped.push('%');
    for ch in query.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

#[async_trait]
impl DirectoryStore for PostgresDirectoryStore {
    async fn list_hospitals(&self, query: Option<&str>) -> Result<Vec<Hospital>> {
        let pattern = query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(like_pattern);

        let rows = sqlx::query(&format!(
            r#"
            SELECT {HOSPITAL_COLUMNS}
            FROM hospitals
            WHERE $1::text IS NULL
               OR name ILIKE $1
               OR name_en ILIKE $1
               OR address ILIKE $1
            ORDER BY created_at DESC, id DESC
            "#
        ))
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(hospital_from_row).collect())
    }

    async fn find_hospital(&self, id: i64) -> Result<Option<HospitalDetail>> {
        let row = sqlx::query(&format!(
            "SELECT {HOSPITAL_COLUMNS} FROM hospitals WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let departments = sqlx::query(
            r#"
            SELECT d.id, d.name
            FROM hospital_departments hd
            JOIN departments d ON d.id = hd.department_id
            WHERE hd.hospital_id = $1
            ORDER BY d.name, d.id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?
        .iter()
        .map(|row| Department {
            id: row.get("id"),
            name: row.get("name"),
        })
        .collect();

        Ok(Some(HospitalDetail {
            hospital: hospital_from_row(&row),
            departments,
        }))
    }

    async fn create_hospital(&self, hospital: NewHospital) -> Result<Hospital> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO hospitals (name, address, phone, created_at)
            VALUES ($1, $2, $3, NOW())
            RETURNING {HOSPITAL_COLUMNS}
            "#
        ))
        .bind(hospital.name())
        .bind(hospital.address())
        .bind(hospital.phone())
        .fetch_one(&self.pool)
        .await?;

        Ok(hospital_from_row(&row))
    }

    async fn list_requests(&self) -> Result<Vec<RequestWithHospital>> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {REQUEST_COLUMNS},
                   h.name AS hospital_name,
                   h.name_en AS hospital_name_en
            FROM requests r
            JOIN hospitals h ON h.id = r.hospital_id
            ORDER BY r.created_at DESC, r.id DESC
            "#
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|row| {
                let request = request_from_row(row);
                let hospital = HospitalSummary {
                    id: request.hospital_id,
                    name: row.get("hospital_name"),
                    name_en: row.get("hospital_name_en"),
                };
                RequestWithHospital { request, hospital }
            })
            .collect())
    }

    async fn create_request(&self, request: NewVisitRequest) -> Result<VisitRequest> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO requests AS r (hospital_id, "type", name, phone, message, preferred_at, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, NOW())
            RETURNING {REQUEST_COLUMNS}
            "#
        ))
        .bind(request.hospital_id)
        .bind(&request.kind)
        .bind(&request.name)
        .bind(&request.phone)
        .bind(&request.message)
        .bind(request.preferred_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(request_from_row(&row))
    }

    async fn increment_qna_views(&self, id: i64) -> Result<Option<QnaWithAuthor>> {
        // One statement: no row is touched when the post does not exist, and
        // a concurrent delete cannot slip between the increment and the read.
        let row = sqlx::query(
            r#"
            WITH bumped AS (
                UPDATE qnas
                SET view_count = view_count + 1
                WHERE id = $1
                RETURNING id, title, content, view_count, user_id, created_at
            )
            SELECT b.id, b.title, b.content, b.view_count, b.user_id, b.created_at,
                   u.name AS user_name, u.image AS user_image
            FROM bumped b
            JOIN users u ON u.id = b.user_id
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| {
            let qna = Qna {
                id: row.get("id"),
                title: row.get("title"),
                content: row.get("content"),
                view_count: row.get("view_count"),
                user_id: row.get("user_id"),
                created_at: row.get("created_at"),
            };
            let user = UserSummary {
                id: qna.user_id,
                name: row.get("user_name"),
                image: row.get("user_image"),
            };
            QnaWithAuthor { qna, user }
        }))
    }

    async fn list_reviews_by_user(&self, user_id: i64) -> Result<Vec<ReviewWithHospital>> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {REVIEW_COLUMNS}, h.name AS hospital_name
            FROM reviews r
            JOIN hospitals h ON h.id = r.hospital_id
            WHERE r.user_id = $1
            ORDER BY r.created_at DESC, r.id DESC
            "#
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|row| {
                let review = review_from_row(row);
                let hospital = HospitalLabel {
                    id: review.hospital_id,
                    name: row.get("hospital_name"),
                };
                ReviewWithHospital { review, hospital }
            })
            .collect())
    }

    async fn list_reviews(&self) -> Result<Vec<Review>> {
        let rows = sqlx::query(&format!(
            "SELECT {REVIEW_COLUMNS} FROM reviews r ORDER BY r.created_at, r.id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(review_from_row).collect())
    }

    async fn set_review_verified(&self, review_id: i64, verified: bool) -> Result<()> {
        let result = sqlx::query("UPDATE reviews SET verified = $2 WHERE id = $1")
            .bind(review_id)
            .bind(verified)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(crate::Error::NotFound(format!("Review {review_id}")));
        }
        Ok(())
    }

    async fn hospital_exists(&self, id: i64) -> Result<bool> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM hospitals WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn user_exists(&self, id: i64) -> Result<bool> {
        let (exists,): (bool,) = sqlx::query_as("SELECT EXISTS (SELECT 1 FROM users WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }
}
