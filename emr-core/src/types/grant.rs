//! Access grant documents for the Grant Ledger

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{DocType, EntityId, RecordRef, TxId};

/// Access grant document
///
/// Keyed by a fresh transaction id rather than by the (record, entity)
/// pair, so grant keys never collide; uniqueness of the pair is a
/// logical invariant enforced by query before the write. Grants are
/// immutable and never revoked.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessGrant {
    pub doc_type: DocType,
    pub record_id: RecordRef,
    pub entity_id: EntityId,
    pub payment_tx_id: TxId,
    pub created_at: DateTime<Utc>,
}

impl AccessGrant {
    pub fn new(
        record_id: RecordRef,
        entity_id: EntityId,
        payment_tx_id: TxId,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            doc_type: DocType::Grant,
            record_id,
            entity_id,
            payment_tx_id,
            created_at: at,
        }
    }

    /// Check whether this grant covers the given (record, entity) pair.
    pub fn covers(&self, record_id: &RecordRef, entity_id: &EntityId) -> bool {
        self.record_id == *record_id && self.entity_id == *entity_id
    }
}
