//! Entity Registry service

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use emr_core::error::{LedgerError, LedgerResult};
use emr_core::ledger::EntityRegistry;
use emr_core::logging::operations;
use emr_core::store::StateStore;
use emr_core::types::{Doctor, DocType, Entity, EntityId, Facility, Patient};

use super::docs::{get_doc, list_by_doc_type, present, put_doc};

/// Registry of patients, doctors, facilities and generic entities.
pub struct RegistryService {
    store: Arc<dyn StateStore>,
}

impl RegistryService {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }

    async fn exists(&self, id: &EntityId) -> LedgerResult<bool> {
        let bytes = self.store.get(id.as_str()).await?;
        Ok(present(&bytes))
    }

    async fn list<T: serde::de::DeserializeOwned>(
        &self,
        doc_type: DocType,
    ) -> LedgerResult<Vec<(EntityId, T)>> {
        let rows = list_by_doc_type::<T>(self.store.as_ref(), doc_type).await?;
        Ok(rows
            .into_iter()
            .map(|(key, doc)| (EntityId::new(key), doc))
            .collect())
    }
}

#[async_trait]
impl EntityRegistry for RegistryService {
    async fn register_patient(
        &self,
        id: &EntityId,
        first_name: &str,
        last_name: &str,
    ) -> LedgerResult<()> {
        let patient = Patient::new(first_name, last_name);
        put_doc(self.store.as_ref(), id.as_str(), &patient).await?;
        info!(
            operation = operations::REGISTER,
            kind = %DocType::Patient,
            entity_id = %id,
            "registered patient"
        );
        Ok(())
    }

    async fn get_patient(&self, id: &EntityId) -> LedgerResult<Patient> {
        get_doc(
            self.store.as_ref(),
            id.as_str(),
            LedgerError::patient_not_found(id),
        )
        .await
    }

    async fn patient_exists(&self, id: &EntityId) -> LedgerResult<bool> {
        self.exists(id).await
    }

    async fn list_patients(&self) -> LedgerResult<Vec<(EntityId, Patient)>> {
        self.list(DocType::Patient).await
    }

    async fn register_doctor(
        &self,
        id: &EntityId,
        first_name: &str,
        last_name: &str,
    ) -> LedgerResult<()> {
        let doctor = Doctor::new(first_name, last_name);
        put_doc(self.store.as_ref(), id.as_str(), &doctor).await?;
        info!(
            operation = operations::REGISTER,
            kind = %DocType::Doctor,
            entity_id = %id,
            "registered doctor"
        );
        Ok(())
    }

    async fn get_doctor(&self, id: &EntityId) -> LedgerResult<Doctor> {
        get_doc(
            self.store.as_ref(),
            id.as_str(),
            LedgerError::doctor_not_found(id),
        )
        .await
    }

    async fn doctor_exists(&self, id: &EntityId) -> LedgerResult<bool> {
        self.exists(id).await
    }

    async fn list_doctors(&self) -> LedgerResult<Vec<(EntityId, Doctor)>> {
        self.list(DocType::Doctor).await
    }

    async fn register_facility(&self, id: &EntityId, name: &str) -> LedgerResult<()> {
        let facility = Facility::new(name);
        put_doc(self.store.as_ref(), id.as_str(), &facility).await?;
        info!(
            operation = operations::REGISTER,
            kind = %DocType::Facility,
            entity_id = %id,
            "registered facility"
        );
        Ok(())
    }

    async fn list_facilities(&self) -> LedgerResult<Vec<(EntityId, Facility)>> {
        self.list(DocType::Facility).await
    }

    async fn register_entity(&self, id: &EntityId, name: &str) -> LedgerResult<()> {
        let entity = Entity::new(name);
        put_doc(self.store.as_ref(), id.as_str(), &entity).await?;
        info!(
            operation = operations::REGISTER,
            kind = %DocType::Entity,
            entity_id = %id,
            "registered entity"
        );
        Ok(())
    }

    async fn list_entities(&self) -> LedgerResult<Vec<(EntityId, Entity)>> {
        self.list(DocType::Entity).await
    }
}
