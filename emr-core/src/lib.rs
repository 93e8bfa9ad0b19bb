//! EMR Core - medical record ledger contracts
//!
//! This crate provides the core types and interfaces for the EMR ledger:
//! - Document types stored in the state store (patients, doctors,
//!   facilities, generic entities, clinical records, access grants)
//! - Ledger operation traits (`EntityRegistry`, `RecordLedger`,
//!   `GrantLedger`)
//! - Collaborator contracts supplied by the hosting environment
//!   (`StateStore`, `IdentityResolver`, `TxEnv`)
//! - The shared error taxonomy
//!
//! All documents share one key space in the state store; a `docType`
//! field disambiguates document kinds. Service implementations of the
//! ledger traits live in the `emr-db` crate.

pub mod env;
pub mod error;
pub mod identity;
pub mod ledger;
pub mod logging;
pub mod store;
pub mod types;

pub use error::{LedgerError, LedgerResult};
pub use types::*;
