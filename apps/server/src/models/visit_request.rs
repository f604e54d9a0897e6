use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::HospitalSummary;

/// A visit or contact request left for a hospital.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitRequest {
    pub id: i64,
    pub hospital_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub phone: String,
    pub message: Option<String>,
    pub preferred_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVisitRequest {
    pub hospital_id: i64,
    pub kind: String,
    pub name: String,
    pub phone: String,
    pub message: Option<String>,
    pub preferred_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestWithHospital {
    #[serde(flatten)]
    pub request: VisitRequest,
    pub hospital: HospitalSummary,
}
