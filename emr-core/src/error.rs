//! Error types for the EMR ledger
//!
//! NotFound and conflict conditions are detected before any mutating
//! write and abort the whole operation. Unauthorized record reads are
//! NOT errors; see `RecordReadOutcome`.

use thiserror::Error;

use crate::identity::IdentityError;
use crate::store::StoreError;
use crate::types::{EntityId, RecordRef};

/// Ledger operation errors
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("The {kind} with ID {id} does not exist")]
    NotFound { kind: &'static str, id: String },

    #[error("The entity with ID {entity_id} already has an access to the record with ID {record_id}")]
    GrantExists {
        record_id: RecordRef,
        entity_id: EntityId,
    },

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Identity error: {0}")]
    Identity(#[from] IdentityError),
}

impl LedgerError {
    pub fn patient_not_found(id: &EntityId) -> Self {
        Self::NotFound {
            kind: "patient",
            id: id.as_str().to_string(),
        }
    }

    pub fn doctor_not_found(id: &EntityId) -> Self {
        Self::NotFound {
            kind: "doctor",
            id: id.as_str().to_string(),
        }
    }

    pub fn entity_not_found(id: &EntityId) -> Self {
        Self::NotFound {
            kind: "entity",
            id: id.as_str().to_string(),
        }
    }

    pub fn record_not_found(id: &RecordRef) -> Self {
        Self::NotFound {
            kind: "record",
            id: id.as_str().to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::GrantExists { .. })
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = LedgerError::patient_not_found(&EntityId::new("p1"));
        assert_eq!(err.to_string(), "The patient with ID p1 does not exist");
        assert!(err.is_not_found());
        assert!(!err.is_conflict());
    }

    #[test]
    fn test_conflict_message() {
        let err = LedgerError::GrantExists {
            record_id: RecordRef::new("r1"),
            entity_id: EntityId::new("e1"),
        };
        assert!(err.is_conflict());
        assert!(err.to_string().contains("already has an access"));
    }
}
