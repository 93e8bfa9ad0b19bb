//! Record Manager - clinical record writes and gated reads

use async_trait::async_trait;

use crate::error::LedgerResult;
use crate::types::{EntityId, MedicalRecord, RecordRef, RecordReadOutcome};

/// Creates and reads clinical records, enforcing the
/// single-active-record-per-patient rule.
#[async_trait]
pub trait RecordLedger: Send + Sync {
    /// Create or update the record for `patient_id`.
    ///
    /// The first successful call binds the patient to `record_id`; every
    /// later call for the same patient writes to that bound key,
    /// silently ignoring a differing `record_id` argument. `created_at`
    /// is preserved across rewrites of the same physical key;
    /// `updated_at` always takes the current invocation's timestamp.
    ///
    /// Fails with `NotFound` if the patient is not registered.
    async fn create_record(
        &self,
        record_id: &RecordRef,
        patient_id: &EntityId,
        doctor_id: &EntityId,
        facility_id: &EntityId,
        metadata: &str,
    ) -> LedgerResult<()>;

    /// Authorization-gated read.
    ///
    /// Returns `Authorized` with the decoded metadata iff a grant exists
    /// for (record, caller), `Unauthorized` otherwise. A missing record
    /// is a `NotFound` error regardless of grants.
    async fn get_record(&self, record_id: &RecordRef) -> LedgerResult<RecordReadOutcome>;

    /// All records, raw and unfiltered.
    ///
    /// No authorization is applied here; callers must not expose this
    /// operation to untrusted principals.
    async fn list_records(&self) -> LedgerResult<Vec<(RecordRef, MedicalRecord)>>;
}
