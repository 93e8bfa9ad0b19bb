//! Entity Registry - registration and retrieval of principals

use async_trait::async_trait;

use crate::error::LedgerResult;
use crate::types::{Doctor, Entity, EntityId, Facility, Patient};

/// Registers and retrieves patients, doctors, facilities and generic
/// grantable entities.
///
/// Registration performs no existence check: a repeated call with the
/// same id silently overwrites the previous document. Callers are
/// expected to supply collision-resistant ids (e.g. a hash).
#[async_trait]
pub trait EntityRegistry: Send + Sync {
    /// Register a patient under `id`. The patient carries no record
    /// until the first `create_record` naming it.
    async fn register_patient(
        &self,
        id: &EntityId,
        first_name: &str,
        last_name: &str,
    ) -> LedgerResult<()>;

    /// Fetch a patient; `NotFound` if absent or empty.
    async fn get_patient(&self, id: &EntityId) -> LedgerResult<Patient>;

    /// Presence check; missing or empty documents count as absent.
    /// Never fails with `NotFound`.
    async fn patient_exists(&self, id: &EntityId) -> LedgerResult<bool>;

    /// All patients, in store iteration order.
    async fn list_patients(&self) -> LedgerResult<Vec<(EntityId, Patient)>>;

    async fn register_doctor(
        &self,
        id: &EntityId,
        first_name: &str,
        last_name: &str,
    ) -> LedgerResult<()>;

    /// Fetch a doctor; `NotFound` if absent or empty.
    async fn get_doctor(&self, id: &EntityId) -> LedgerResult<Doctor>;

    async fn doctor_exists(&self, id: &EntityId) -> LedgerResult<bool>;

    async fn list_doctors(&self) -> LedgerResult<Vec<(EntityId, Doctor)>>;

    async fn register_facility(&self, id: &EntityId, name: &str) -> LedgerResult<()>;

    async fn list_facilities(&self) -> LedgerResult<Vec<(EntityId, Facility)>>;

    /// Register a generic grantable entity under `id`.
    async fn register_entity(&self, id: &EntityId, name: &str) -> LedgerResult<()>;

    async fn list_entities(&self) -> LedgerResult<Vec<(EntityId, Entity)>>;
}
