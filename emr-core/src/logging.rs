//! Logging conventions
//!
//! Services log through `tracing` with structured fields (`record_id`,
//! `entity_id`, `tx_id`); operation names come from this module so log
//! processors can group events by operation.

/// Canonical operation names for structured logging
pub mod operations {
    pub const REGISTER: &str = "register";
    pub const RECORD_WRITE: &str = "record_write";
    pub const RECORD_READ: &str = "record_read";
    pub const ACCESS_GRANT: &str = "access_grant";
    pub const ACCESS_DENY: &str = "access_deny";
}
