//! Ledger operation traits
//!
//! Three components share the state store's key space, disambiguated by
//! `docType`:
//! - Entity Registry: principal registration and lookup
//! - Record Manager: clinical record writes and authorization-gated reads
//! - Grant Ledger: access grants gating record reads

mod grants;
mod records;
mod registry;

pub use grants::GrantLedger;
pub use records::RecordLedger;
pub use registry::EntityRegistry;
