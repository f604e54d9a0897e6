//! Hospital registration
//!
//! One validated creation operation shared by the admin form and the JSON
//! API. Both adapters hand a [`HospitalDraft`] to [`HospitalService::create`]
//! and react to the returned result; nothing here panics or throws to abort.

use crate::{
    db::DirectoryStore,
    messages,
    models::{Hospital, NewHospital},
};
use serde::Deserialize;
use std::{fmt, sync::Arc};
use thiserror::Error;

/// Raw hospital input exactly as submitted. Missing fields are `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HospitalDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HospitalValidationError {
    #[error("{}", messages::HOSPITAL_NAME_REQUIRED)]
    MissingName,
    #[error("{}", messages::HOSPITAL_ADDRESS_REQUIRED)]
    MissingAddress,
}

#[derive(Debug, Error)]
pub enum CreateHospitalError {
    #[error(transparent)]
    Invalid(#[from] HospitalValidationError),
    #[error(transparent)]
    Store(#[from] crate::Error),
}

/// Which adapter submitted the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPoint {
    Form,
    Json,
}

impl EntryPoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryPoint::Form => "form",
            EntryPoint::Json => "json",
        }
    }
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl HospitalDraft {
    /// Check the required-field contract: `name` and `address` must be
    /// non-blank. A blank `phone` becomes `None`.
    pub fn validate(self) -> Result<NewHospital, HospitalValidationError> {
        let name = non_blank(self.name).ok_or(HospitalValidationError::MissingName)?;
        let address = non_blank(self.address).ok_or(HospitalValidationError::MissingAddress)?;

        Ok(NewHospital {
            name,
            address,
            phone: non_blank(self.phone),
        })
    }
}

pub struct HospitalService {
    store: Arc<dyn DirectoryStore>,
}

impl HospitalService {
    pub fn new(store: Arc<dyn DirectoryStore>) -> Self {
        Self { store }
    }

    pub async fn create(
        &self,
        draft: HospitalDraft,
        entry_point: EntryPoint,
    ) -> Result<Hospital, CreateHospitalError> {
        let new_hospital = match draft.validate() {
            Ok(h) => h,
            Err(e) => {
                tracing::debug!(entry_point = %entry_point, reason = ?e, "Rejected hospital draft");
                crate::metrics::HOSPITAL_VALIDATION_FAILURES_TOTAL
                    .with_label_values(&[entry_point.as_str()])
                    .inc();
                return Err(e.into());
            }
        };

        let hospital = self.store.create_hospital(new_hospital).await?;

        crate::metrics::HOSPITALS_CREATED_TOTAL
            .with_label_values(&[entry_point.as_str()])
            .inc();
        tracing::info!(
            hospital_id = hospital.id,
            entry_point = %entry_point,
            "Hospital registered"
        );

        Ok(hospital)
    }
}
