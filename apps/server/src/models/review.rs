use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::HospitalLabel;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub user_id: i64,
    pub hospital_id: i64,
    pub rating: Option<i32>,
    pub content: Option<String>,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewWithHospital {
    #[serde(flatten)]
    pub review: Review,
    pub hospital: HospitalLabel,
}

/// Outcome of a bulk re-verification run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReverifySummary {
    pub total: usize,
    pub verified: usize,
    pub unverified: usize,
    /// Reviews whose flag changed in this run.
    pub changed: usize,
}
