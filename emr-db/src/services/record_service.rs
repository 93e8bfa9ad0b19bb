//! Record Manager service

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use emr_core::env::TxEnv;
use emr_core::error::{LedgerError, LedgerResult};
use emr_core::identity::IdentityResolver;
use emr_core::ledger::RecordLedger;
use emr_core::logging::operations;
use emr_core::store::{Selector, StateStore};
use emr_core::types::{
    AccessGrant, DocType, EntityId, MedicalRecord, Patient, RecordRef, RecordReadOutcome,
};

use super::docs::{decode_doc, list_by_doc_type, put_doc};

/// Clinical record writes and authorization-gated reads.
///
/// Check-then-act sequences here rely on the hosting environment
/// serializing conflicting invocations; the service itself takes no
/// locks.
pub struct RecordService {
    store: Arc<dyn StateStore>,
    identity: Arc<dyn IdentityResolver>,
    env: Arc<dyn TxEnv>,
}

impl RecordService {
    pub fn new(
        store: Arc<dyn StateStore>,
        identity: Arc<dyn IdentityResolver>,
        env: Arc<dyn TxEnv>,
    ) -> Self {
        Self {
            store,
            identity,
            env,
        }
    }
}

#[async_trait]
impl RecordLedger for RecordService {
    async fn create_record(
        &self,
        record_id: &RecordRef,
        patient_id: &EntityId,
        doctor_id: &EntityId,
        facility_id: &EntityId,
        metadata: &str,
    ) -> LedgerResult<()> {
        let now = self.env.now();

        let (existing, patient) = tokio::join!(
            self.store.get(record_id.as_str()),
            self.store.get(patient_id.as_str()),
        );
        let mut patient: Patient =
            decode_doc(patient?, LedgerError::patient_not_found(patient_id))?;

        let mut record = MedicalRecord::draft(patient_id, doctor_id, facility_id, metadata, now);
        // A rewrite keeps the original creation time. The existing
        // document is looked up under the argument key, mirroring how
        // rewrites are expected to repeat the bound record id.
        if let Some(bytes) = existing?.filter(|b| !b.is_empty()) {
            let previous: MedicalRecord = serde_json::from_slice(&bytes)?;
            record.created_at = previous.created_at;
        }

        if let Some(bound) = patient.record_id.clone() {
            // Patient already bound; the argument record id is ignored
            // and the write lands on the bound key.
            put_doc(self.store.as_ref(), bound.as_str(), &record).await?;
            info!(
                operation = operations::RECORD_WRITE,
                record_id = %bound,
                patient_id = %patient_id,
                "record updated"
            );
        } else {
            patient.record_id = Some(record_id.clone());
            tokio::try_join!(
                put_doc(self.store.as_ref(), record_id.as_str(), &record),
                put_doc(self.store.as_ref(), patient_id.as_str(), &patient),
            )?;
            info!(
                operation = operations::RECORD_WRITE,
                record_id = %record_id,
                patient_id = %patient_id,
                "record created"
            );
        }
        Ok(())
    }

    async fn get_record(&self, record_id: &RecordRef) -> LedgerResult<RecordReadOutcome> {
        let caller = self.identity.resolve_caller_id().await?;

        let selector = Selector::for_doc_type(DocType::Grant)
            .field("recordId", record_id.as_str())
            .field("entityId", caller.as_str());
        let (record, grants) = tokio::join!(
            self.store.get(record_id.as_str()),
            self.store.query(&selector),
        );
        let record: MedicalRecord =
            decode_doc(record?, LedgerError::record_not_found(record_id))?;

        for (_, bytes) in grants? {
            let grant: AccessGrant = serde_json::from_slice(&bytes)?;
            if grant.covers(record_id, &caller) {
                info!(
                    operation = operations::RECORD_READ,
                    record_id = %record_id,
                    entity_id = %caller,
                    "record read authorized"
                );
                return Ok(RecordReadOutcome::Authorized {
                    metadata: serde_json::from_str(&record.metadata)?,
                    created_at: record.created_at,
                    updated_at: record.updated_at,
                });
            }
        }

        warn!(
            operation = operations::ACCESS_DENY,
            record_id = %record_id,
            entity_id = %caller,
            "record read denied"
        );
        Ok(RecordReadOutcome::Unauthorized)
    }

    async fn list_records(&self) -> LedgerResult<Vec<(RecordRef, MedicalRecord)>> {
        let rows = list_by_doc_type::<MedicalRecord>(self.store.as_ref(), DocType::Record).await?;
        Ok(rows
            .into_iter()
            .map(|(key, record)| (RecordRef::new(key), record))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::RegistryService;
    use crate::store::MemoryStateStore;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use emr_core::identity::CredentialIdentity;
    use emr_core::ledger::EntityRegistry;
    use emr_core::types::TxId;
    use serde_json::json;
    use std::sync::Mutex;

    struct StepClock {
        now: Mutex<DateTime<Utc>>,
    }

    impl StepClock {
        fn new() -> Self {
            Self {
                now: Mutex::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            }
        }

        fn advance(&self, by: Duration) {
            *self.now.lock().unwrap() += by;
        }
    }

    impl TxEnv for StepClock {
        fn now(&self) -> DateTime<Utc> {
            *self.now.lock().unwrap()
        }

        fn new_tx_id(&self) -> TxId {
            TxId::new("tx_test")
        }
    }

    fn harness(
        credential: &str,
    ) -> (
        Arc<MemoryStateStore>,
        Arc<StepClock>,
        RegistryService,
        RecordService,
    ) {
        let store = Arc::new(MemoryStateStore::new());
        let clock = Arc::new(StepClock::new());
        let registry = RegistryService::new(store.clone());
        let records = RecordService::new(
            store.clone(),
            Arc::new(CredentialIdentity::new(credential)),
            clock.clone(),
        );
        (store, clock, registry, records)
    }

    async fn seed_principals(registry: &RegistryService) {
        registry
            .register_patient(&EntityId::new("p1"), "Ada", "Lovelace")
            .await
            .unwrap();
        registry
            .register_doctor(&EntityId::new("d1"), "John", "Snow")
            .await
            .unwrap();
        registry
            .register_facility(&EntityId::new("f1"), "St. Mary")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_create_record_binds_patient() {
        let (_, _, registry, records) = harness("/CN=e1");
        seed_principals(&registry).await;

        records
            .create_record(
                &RecordRef::new("r1"),
                &EntityId::new("p1"),
                &EntityId::new("d1"),
                &EntityId::new("f1"),
                "{\"note\":\"first\"}",
            )
            .await
            .unwrap();

        let patient = registry.get_patient(&EntityId::new("p1")).await.unwrap();
        assert_eq!(patient.record_id, Some(RecordRef::new("r1")));

        let listed = records.list_records().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].0, RecordRef::new("r1"));
        assert_eq!(listed[0].1.owner_list.len(), 3);
    }

    #[tokio::test]
    async fn test_create_record_requires_patient() {
        let (_, _, _registry, records) = harness("/CN=e1");
        let err = records
            .create_record(
                &RecordRef::new("r1"),
                &EntityId::new("ghost"),
                &EntityId::new("d1"),
                &EntityId::new("f1"),
                "{}",
            )
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "The patient with ID ghost does not exist");
    }

    #[tokio::test]
    async fn test_rewrite_keeps_binding_and_created_at() {
        let (_, clock, registry, records) = harness("/CN=e1");
        seed_principals(&registry).await;

        records
            .create_record(
                &RecordRef::new("r1"),
                &EntityId::new("p1"),
                &EntityId::new("d1"),
                &EntityId::new("f1"),
                "{\"v\":1}",
            )
            .await
            .unwrap();
        let first = records.list_records().await.unwrap().remove(0).1;

        // Second write names a different record id; the binding wins.
        clock.advance(Duration::minutes(5));
        records
            .create_record(
                &RecordRef::new("r2"),
                &EntityId::new("p1"),
                &EntityId::new("d1"),
                &EntityId::new("f1"),
                "{\"v\":2}",
            )
            .await
            .unwrap();

        let patient = registry.get_patient(&EntityId::new("p1")).await.unwrap();
        assert_eq!(patient.record_id, Some(RecordRef::new("r1")));

        let listed = records.list_records().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].1.metadata, "{\"v\":2}");
        assert_eq!(listed[0].1.created_at, first.created_at);
        assert_eq!(listed[0].1.updated_at - first.updated_at, Duration::minutes(5));
    }

    #[tokio::test]
    async fn test_rewrite_on_same_key_preserves_created_at() {
        let (_, clock, registry, records) = harness("/CN=e1");
        seed_principals(&registry).await;

        records
            .create_record(
                &RecordRef::new("r1"),
                &EntityId::new("p1"),
                &EntityId::new("d1"),
                &EntityId::new("f1"),
                "{\"v\":1}",
            )
            .await
            .unwrap();
        let first = records.list_records().await.unwrap().remove(0).1;

        clock.advance(Duration::minutes(5));
        records
            .create_record(
                &RecordRef::new("r1"),
                &EntityId::new("p1"),
                &EntityId::new("d1"),
                &EntityId::new("f1"),
                "{\"v\":2}",
            )
            .await
            .unwrap();

        let second = records.list_records().await.unwrap().remove(0).1;
        assert_eq!(second.created_at, first.created_at);
        assert_eq!(second.updated_at - first.updated_at, Duration::minutes(5));
    }

    #[tokio::test]
    async fn test_get_record_missing_is_not_found() {
        let (_, _, _registry, records) = harness("/CN=e1");
        let err = records.get_record(&RecordRef::new("r1")).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_get_record_without_grant_is_unauthorized() {
        let (_, _, registry, records) = harness("/CN=e1");
        seed_principals(&registry).await;
        records
            .create_record(
                &RecordRef::new("r1"),
                &EntityId::new("p1"),
                &EntityId::new("d1"),
                &EntityId::new("f1"),
                "{\"note\":\"x\"}",
            )
            .await
            .unwrap();

        let outcome = records.get_record(&RecordRef::new("r1")).await.unwrap();
        assert_eq!(outcome, RecordReadOutcome::Unauthorized);
    }

    #[tokio::test]
    async fn test_get_record_with_grant_decodes_metadata() {
        let (store, _, registry, records) = harness("/CN=e1");
        seed_principals(&registry).await;
        records
            .create_record(
                &RecordRef::new("r1"),
                &EntityId::new("p1"),
                &EntityId::new("d1"),
                &EntityId::new("f1"),
                "{\"note\":\"x\"}",
            )
            .await
            .unwrap();

        let grant = AccessGrant::new(
            RecordRef::new("r1"),
            EntityId::new("e1"),
            emr_core::types::TxId::new("pay1"),
            chrono::Utc::now(),
        );
        store
            .put("tx1", serde_json::to_vec(&grant).unwrap())
            .await
            .unwrap();

        match records.get_record(&RecordRef::new("r1")).await.unwrap() {
            RecordReadOutcome::Authorized { metadata, .. } => {
                assert_eq!(metadata, json!({"note": "x"}));
            }
            RecordReadOutcome::Unauthorized => panic!("expected authorized read"),
        }
    }
}
