//! Principal documents managed by the Entity Registry
//!
//! Principals are created once by registration and never deleted. The
//! only field that ever changes afterwards is `Patient::record_id`,
//! set exactly once when the patient's first record is created.

use serde::{Deserialize, Serialize};

use super::common::{DocType, EntityId, RecordRef};

/// Patient document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub doc_type: DocType,
    #[serde(rename = "fullname")]
    pub full_name: String,
    /// Key of the patient's one active record; unset until the first
    /// record is created for this patient, then never rebound.
    pub record_id: Option<RecordRef>,
}

impl Patient {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            doc_type: DocType::Patient,
            full_name: format!("{first_name} {last_name}"),
            record_id: None,
        }
    }

    pub fn has_record(&self) -> bool {
        self.record_id.is_some()
    }
}

/// Doctor document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub doc_type: DocType,
    #[serde(rename = "fullname")]
    pub full_name: String,
    /// Reserved extension point; no operation reads or writes it.
    pub access_list: Vec<EntityId>,
}

impl Doctor {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            doc_type: DocType::Doctor,
            full_name: format!("{first_name} {last_name}"),
            access_list: Vec::new(),
        }
    }
}

/// Facility document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub doc_type: DocType,
    pub facility_name: String,
}

impl Facility {
    pub fn new(name: &str) -> Self {
        Self {
            doc_type: DocType::Facility,
            facility_name: name.to_string(),
        }
    }
}

/// Generic entity document - a catch-all principal kind grantable for
/// record access (insurers, labs, research programs, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub doc_type: DocType,
    pub entity_name: String,
}

impl Entity {
    pub fn new(name: &str) -> Self {
        Self {
            doc_type: DocType::Entity,
            entity_name: name.to_string(),
        }
    }
}
