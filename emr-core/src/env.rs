//! Invocation environment collaborator
//!
//! Timestamps and fresh transaction identifiers come from the hosting
//! execution environment, one value per invocation. The system-clock
//! implementation lives in `emr-db`; tests substitute a controllable
//! clock.

use chrono::{DateTime, Utc};

use crate::types::TxId;

/// Clock and transaction-id source for ledger operations
pub trait TxEnv: Send + Sync {
    /// Timestamp for the current invocation.
    fn now(&self) -> DateTime<Utc>;

    /// Fresh transaction identifier for the current invocation.
    fn new_tx_id(&self) -> TxId;
}
