use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hospital {
    pub id: i64,
    pub name: String,
    pub name_en: Option<String>,
    pub address: String,
    pub phone: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    pub name: String,
}

/// Hospital with its departments resolved through the join table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalDetail {
    #[serde(flatten)]
    pub hospital: Hospital,
    pub departments: Vec<Department>,
}

/// Hospital projection embedded in visit requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalSummary {
    pub id: i64,
    pub name: String,
    pub name_en: Option<String>,
}

/// Hospital projection embedded in reviews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HospitalLabel {
    pub id: i64,
    pub name: String,
}

/// A hospital that passed validation and is ready to insert.
///
/// Only `services::hospitals::HospitalDraft::validate` builds one, so a
/// value of this type always has a non-empty name and address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHospital {
    pub(crate) name: String,
    pub(crate) address: String,
    pub(crate) phone: Option<String>,
}

impl NewHospital {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }
}

impl From<&Hospital> for HospitalSummary {
    fn from(h: &Hospital) -> Self {
        Self {
            id: h.id,
            name: h.name.clone(),
            name_en: h.name_en.clone(),
        }
    }
}

impl From<&Hospital> for HospitalLabel {
    fn from(h: &Hospital) -> Self {
        Self {
            id: h.id,
            name: h.name.clone(),
        }
    }
}
