//! Storage trait for the hospital directory

use crate::{
    models::{
        Hospital, HospitalDetail, NewHospital, NewVisitRequest, QnaWithAuthor,
        RequestWithHospital, Review, ReviewWithHospital, VisitRequest,
    },
    Result,
};
use async_trait::async_trait;

/// Entity-scoped reads and writes over the directory.
///
/// Any backend (PostgreSQL, in-memory, ...) can implement this trait. Each
/// method is a single unit of work; implementations provide their own
/// isolation per call.
#[async_trait]
pub trait DirectoryStore: Send + Sync {
    /// List hospitals, newest first.
    ///
    /// `query` filters case-insensitively on name, English name and address.
    async fn list_hospitals(&self, query: Option<&str>) -> Result<Vec<Hospital>>;

    /// Read a hospital with its departments.
    ///
    /// # Returns
    /// * `Ok(Some(detail))` - Hospital found
    /// * `Ok(None)` - No hospital with this id
    async fn find_hospital(&self, id: i64) -> Result<Option<HospitalDetail>>;

    async fn create_hospital(&self, hospital: NewHospital) -> Result<Hospital>;

    /// All visit requests, newest first, with their hospital summary.
    async fn list_requests(&self) -> Result<Vec<RequestWithHospital>>;

    /// Insert a visit request.
    ///
    /// # Errors
    /// Fails if the referenced hospital does not exist.
    async fn create_request(&self, request: NewVisitRequest) -> Result<VisitRequest>;

    /// Atomically increment a Q&A view count and return the updated post.
    ///
    /// Returns `Ok(None)` without side effects when the post does not exist.
    async fn increment_qna_views(&self, id: i64) -> Result<Option<QnaWithAuthor>>;

    /// Reviews written by a user, newest first.
    async fn list_reviews_by_user(&self, user_id: i64) -> Result<Vec<ReviewWithHospital>>;

    /// Every review, oldest first.
    async fn list_reviews(&self) -> Result<Vec<Review>>;

    async fn set_review_verified(&self, review_id: i64, verified: bool) -> Result<()>;

    async fn hospital_exists(&self, id: i64) -> Result<bool>;

    async fn user_exists(&self, id: i64) -> Result<bool>;
}
