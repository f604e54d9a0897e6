//! Visit/contact requests left on a hospital page.

use crate::{
    db::DirectoryStore,
    messages,
    models::{NewVisitRequest, VisitRequest},
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitRequestPayload {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub preferred_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestValidationError {
    /// JSON field names of the required fields that were missing or blank.
    #[error("{}", messages::REQUEST_FIELDS_REQUIRED)]
    MissingFields(Vec<&'static str>),
    #[error("{}", messages::REQUEST_PREFERRED_AT_INVALID)]
    InvalidPreferredAt(String),
}

#[derive(Debug, Error)]
pub enum CreateRequestError {
    #[error(transparent)]
    Invalid(#[from] RequestValidationError),
    #[error(transparent)]
    Store(#[from] crate::Error),
}

/// Parse a preferred visit time.
///
/// Accepts RFC 3339 (`2026-03-01T09:30:00+09:00`), a zone-less date-time as
/// produced by `datetime-local` inputs (read as UTC), or a bare date.
/// Blank input means "no preference".
pub fn parse_preferred_at(
    raw: Option<&str>,
) -> Result<Option<DateTime<Utc>>, RequestValidationError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(dt.with_timezone(&Utc)));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(Some(naive.and_utc()));
        }
    }
    if let Some(midnight) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return Ok(Some(midnight.and_utc()));
    }

    Err(RequestValidationError::InvalidPreferredAt(raw.to_string()))
}

fn required(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl VisitRequestPayload {
    pub fn into_new_request(
        self,
        hospital_id: i64,
    ) -> Result<NewVisitRequest, RequestValidationError> {
        let (kind, name, phone) = match (
            required(self.kind),
            required(self.name),
            required(self.phone),
        ) {
            (Some(kind), Some(name), Some(phone)) => (kind, name, phone),
            (kind, name, phone) => {
                let missing = [
                    ("type", kind.is_none()),
                    ("name", name.is_none()),
                    ("phone", phone.is_none()),
                ]
                .into_iter()
                .filter_map(|(field, absent)| absent.then_some(field))
                .collect();
                return Err(RequestValidationError::MissingFields(missing));
            }
        };

        Ok(NewVisitRequest {
            hospital_id,
            kind,
            name,
            phone,
            message: self.message.filter(|m| !m.trim().is_empty()),
            preferred_at: parse_preferred_at(self.preferred_at.as_deref())?,
        })
    }
}

pub struct VisitRequestService {
    store: Arc<dyn DirectoryStore>,
}

impl VisitRequestService {
    pub fn new(store: Arc<dyn DirectoryStore>) -> Self {
        Self { store }
    }

    pub async fn create(
        &self,
        hospital_id: i64,
        payload: VisitRequestPayload,
    ) -> Result<VisitRequest, CreateRequestError> {
        let new_request = payload.into_new_request(hospital_id)?;
        let request = self.store.create_request(new_request).await?;

        crate::metrics::VISIT_REQUESTS_CREATED_TOTAL
            .with_label_values(&[crate::metrics::request_type_label(&request.kind)])
            .inc();
        tracing::info!(
            request_id = request.id,
            hospital_id,
            kind = %request.kind,
            "Visit request created"
        );

        Ok(request)
    }
}
