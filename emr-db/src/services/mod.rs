//! Ledger services
//!
//! One service per operation trait, all stateless over a shared
//! `StateStore`. Document encode/decode plumbing lives in `docs`.

mod docs;
mod grant_service;
mod record_service;
mod registry_service;

pub use grant_service::GrantService;
pub use record_service::RecordService;
pub use registry_service::RegistryService;
