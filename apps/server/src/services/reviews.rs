//! Review verification

use crate::{
    db::DirectoryStore,
    models::{ReverifySummary, Review, ReviewWithHospital},
    Result,
};
use async_trait::async_trait;
use std::sync::Arc;

/// Decides whether a single review counts as verified.
#[async_trait]
pub trait ReviewVerifier: Send + Sync {
    async fn verify(&self, review: &Review) -> Result<bool>;
}

/// Default rule: a review is verified while both its author and the
/// reviewed hospital are still present in the directory.
pub struct DirectoryReviewVerifier {
    store: Arc<dyn DirectoryStore>,
}

impl DirectoryReviewVerifier {
    pub fn new(store: Arc<dyn DirectoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ReviewVerifier for DirectoryReviewVerifier {
    async fn verify(&self, review: &Review) -> Result<bool> {
        Ok(self.store.user_exists(review.user_id).await?
            && self.store.hospital_exists(review.hospital_id).await?)
    }
}

pub struct ReviewService {
    store: Arc<dyn DirectoryStore>,
    verifier: Arc<dyn ReviewVerifier>,
}

impl ReviewService {
    pub fn new(store: Arc<dyn DirectoryStore>, verifier: Arc<dyn ReviewVerifier>) -> Self {
        Self { store, verifier }
    }

    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<ReviewWithHospital>> {
        self.store.list_reviews_by_user(user_id).await
    }

    /// Re-run verification over every review and persist changed flags.
    ///
    /// Stops at the first failure; flags already written stay written.
    pub async fn reverify_all(&self) -> Result<ReverifySummary> {
        let reviews = self.store.list_reviews().await?;
        let mut summary = ReverifySummary {
            total: reviews.len(),
            ..ReverifySummary::default()
        };

        for review in &reviews {
            let verified = self.verifier.verify(review).await?;
            if verified {
                summary.verified += 1;
            } else {
                summary.unverified += 1;
            }
            if verified != review.verified {
                self.store.set_review_verified(review.id, verified).await?;
                summary.changed += 1;
            }
        }

        crate::metrics::REVIEWS_REVERIFIED_TOTAL.inc_by(summary.total as u64);
        tracing::info!(
            total = summary.total,
            verified = summary.verified,
            unverified = summary.unverified,
            changed = summary.changed,
            "Review re-verification finished"
        );

        Ok(summary)
    }
}
