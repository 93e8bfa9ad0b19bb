//! Clinical record documents and read outcomes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{DocType, EntityId};

/// Clinical record document
///
/// `metadata` arrives already encoded and is stored verbatim; the record
/// manager treats it as an opaque payload and only decodes it on an
/// authorized read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    pub doc_type: DocType,
    /// `[patient, doctor, facility]` associated with this record
    pub owner_list: Vec<EntityId>,
    pub metadata: String,
    /// Set on first creation and preserved across every later write
    pub created_at: DateTime<Utc>,
    /// Advances on every write
    pub updated_at: DateTime<Utc>,
}

impl MedicalRecord {
    /// Build a fresh draft for a write at `at`; `created_at` may later be
    /// adopted from an existing document at the same key.
    pub fn draft(
        patient_id: &EntityId,
        doctor_id: &EntityId,
        facility_id: &EntityId,
        metadata: &str,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            doc_type: DocType::Record,
            owner_list: vec![patient_id.clone(), doctor_id.clone(), facility_id.clone()],
            metadata: metadata.to_string(),
            created_at: at,
            updated_at: at,
        }
    }
}

/// Outcome of an authorization-gated record read
///
/// Denied access is a first-class outcome, not an error: callers branch
/// on the variant instead of catching a failure.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordReadOutcome {
    /// A grant covers the caller; `metadata` is the decoded payload.
    Authorized {
        metadata: Value,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    },
    /// No grant covers the caller.
    Unauthorized,
}

impl RecordReadOutcome {
    pub fn is_authorized(&self) -> bool {
        matches!(self, Self::Authorized { .. })
    }
}
