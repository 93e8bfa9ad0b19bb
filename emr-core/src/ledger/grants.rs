//! Grant Ledger - issuing access grants

use async_trait::async_trait;

use crate::error::LedgerResult;
use crate::types::{EntityId, RecordRef, TxId};

/// Issues access grants and enforces grant uniqueness.
#[async_trait]
pub trait GrantLedger: Send + Sync {
    /// Grant `entity_id` read access to `record_id`.
    ///
    /// The grantee may be any registered principal (entity, doctor,
    /// facility or patient). Fails with `NotFound` if the record or the
    /// grantee is absent, and with `GrantExists` if the pair already
    /// holds a grant. On success, returns the fresh transaction id the
    /// grant was stored under.
    async fn grant_access(
        &self,
        record_id: &RecordRef,
        entity_id: &EntityId,
        payment_tx_id: &TxId,
    ) -> LedgerResult<TxId>;
}
