//! A `DirectoryStore` whose every call fails, for exercising 500 paths.

use async_trait::async_trait;
use carefind::{
    db::DirectoryStore,
    models::{
        Hospital, HospitalDetail, NewHospital, NewVisitRequest, QnaWithAuthor,
        RequestWithHospital, Review, ReviewWithHospital, VisitRequest,
    },
    Error, Result,
};

pub const STORE_FAILURE: &str = "store offline";

pub struct FailingStore;

fn offline<T>() -> Result<T> {
    Err(Error::Other(anyhow::anyhow!(STORE_FAILURE)))
}

#[async_trait]
impl DirectoryStore for FailingStore {
    async fn list_hospitals(&self, _query: Option<&str>) -> Result<Vec<Hospital>> {
        offline()
    }

    async fn find_hospital(&self, _id: i64) -> Result<Option<HospitalDetail>> {
        offline()
    }

    async fn create_hospital(&self, _hospital: NewHospital) -> Result<Hospital> {
        offline()
    }

    async fn list_requests(&self) -> Result<Vec<RequestWithHospital>> {
        offline()
    }

    async fn create_request(&self, _request: NewVisitRequest) -> Result<VisitRequest> {
        offline()
    }

    async fn increment_qna_views(&self, _id: i64) -> Result<Option<QnaWithAuthor>> {
        offline()
    }

    async fn list_reviews_by_user(&self, _user_id: i64) -> Result<Vec<ReviewWithHospital>> {
        offline()
    }

    async fn list_reviews(&self) -> Result<Vec<Review>> {
        offline()
    }

    async fn set_review_verified(&self, _review_id: i64, _verified: bool) -> Result<()> {
        offline()
    }

    async fn hospital_exists(&self, _id: i64) -> Result<bool> {
        offline()
    }

    async fn user_exists(&self, _id: i64) -> Result<bool> {
        offline()
    }
}
