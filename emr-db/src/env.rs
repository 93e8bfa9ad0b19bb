//! System-clock invocation environment

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use emr_core::env::TxEnv;
use emr_core::types::TxId;

/// Wall-clock environment with a per-process transaction-id sequence.
///
/// Transaction ids combine the current timestamp with a monotonically
/// increasing counter, so ids stay unique even for invocations landing
/// in the same microsecond.
#[derive(Debug, Default)]
pub struct SystemTxEnv {
    seq: AtomicU64,
}

impl SystemTxEnv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TxEnv for SystemTxEnv {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn new_tx_id(&self) -> TxId {
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        let micros = Utc::now().timestamp_micros();
        TxId::new(format!("tx_{micros:016x}_{seq:08x}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tx_ids_are_unique() {
        let env = SystemTxEnv::new();
        let a = env.new_tx_id();
        let b = env.new_tx_id();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("tx_"));
    }
}
