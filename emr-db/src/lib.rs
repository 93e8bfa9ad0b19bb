//! EMR ledger services
//!
//! Wires the operation traits from `emr-core` to a [`StateStore`]
//! backend. Construct an [`EmrLedger`] per caller connection: the store
//! and environment are shared, the identity resolver is per caller.

pub mod env;
pub mod services;
pub mod store;

use std::sync::Arc;

use emr_core::env::TxEnv;
use emr_core::identity::IdentityResolver;
use emr_core::store::StateStore;

use crate::services::{GrantService, RecordService, RegistryService};

/// Facade bundling the three ledger services over one shared store.
pub struct EmrLedger {
    registry: RegistryService,
    records: RecordService,
    grants: GrantService,
}

impl EmrLedger {
    pub fn new(
        store: Arc<dyn StateStore>,
        identity: Arc<dyn IdentityResolver>,
        env: Arc<dyn TxEnv>,
    ) -> Self {
        Self {
            registry: RegistryService::new(store.clone()),
            records: RecordService::new(store.clone(), identity, env.clone()),
            grants: GrantService::new(store, env),
        }
    }

    pub fn registry(&self) -> &RegistryService {
        &self.registry
    }

    pub fn records(&self) -> &RecordService {
        &self.records
    }

    pub fn grants(&self) -> &GrantService {
        &self.grants
    }
}
