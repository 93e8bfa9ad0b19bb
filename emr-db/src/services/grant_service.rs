//! Grant Ledger service

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use emr_core::env::TxEnv;
use emr_core::error::{LedgerError, LedgerResult};
use emr_core::ledger::GrantLedger;
use emr_core::logging::operations;
use emr_core::store::{Selector, StateStore};
use emr_core::types::{AccessGrant, DocType, EntityId, RecordRef, TxId};

use super::docs::{present, put_doc};

/// Issues access grants, keyed by fresh transaction ids.
///
/// The duplicate-grant check is check-then-act; the hosting environment
/// is expected to serialize conflicting invocations.
pub struct GrantService {
    store: Arc<dyn StateStore>,
    env: Arc<dyn TxEnv>,
}

impl GrantService {
    pub fn new(store: Arc<dyn StateStore>, env: Arc<dyn TxEnv>) -> Self {
        Self { store, env }
    }
}

#[async_trait]
impl GrantLedger for GrantService {
    async fn grant_access(
        &self,
        record_id: &RecordRef,
        entity_id: &EntityId,
        payment_tx_id: &TxId,
    ) -> LedgerResult<TxId> {
        let tx_id = self.env.new_tx_id();
        let now = self.env.now();

        let selector = Selector::for_doc_type(DocType::Grant)
            .field("recordId", record_id.as_str())
            .field("entityId", entity_id.as_str());
        let (record, grantee, existing) = tokio::join!(
            self.store.get(record_id.as_str()),
            self.store.get(entity_id.as_str()),
            self.store.query(&selector),
        );

        if !present(&record?) {
            return Err(LedgerError::record_not_found(record_id));
        }
        if !present(&grantee?) {
            return Err(LedgerError::entity_not_found(entity_id));
        }
        for (_, bytes) in existing? {
            let grant: AccessGrant = serde_json::from_slice(&bytes)?;
            if grant.covers(record_id, entity_id) {
                return Err(LedgerError::GrantExists {
                    record_id: record_id.clone(),
                    entity_id: entity_id.clone(),
                });
            }
        }

        let grant = AccessGrant::new(
            record_id.clone(),
            entity_id.clone(),
            payment_tx_id.clone(),
            now,
        );
        put_doc(self.store.as_ref(), tx_id.as_str(), &grant).await?;
        info!(
            operation = operations::ACCESS_GRANT,
            record_id = %record_id,
            entity_id = %entity_id,
            tx_id = %tx_id,
            "access granted"
        );
        Ok(tx_id)
    }
}
