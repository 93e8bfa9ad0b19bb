//! In-memory state store

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use emr_core::store::{Selector, StateStore, StoreError};

use std::collections::BTreeMap;

/// In-memory `StateStore` over a sorted map.
///
/// Iteration order is key order, which makes query results
/// deterministic. Selector queries deserialize every stored document, so
/// this backend suits tests and small deployments, not bulk data.
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    entries: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all stored entries.
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    fn matches(selector: &Selector, bytes: &[u8]) -> bool {
        let doc: Value = match serde_json::from_slice(bytes) {
            Ok(doc) => doc,
            // Non-JSON entries never match a selector.
            Err(_) => return false,
        };
        selector
            .criteria()
            .iter()
            .all(|(field, expected)| doc.get(field) == Some(expected))
    }
}

#[async_trait]
impl StateStore for MemoryStateStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn query(&self, selector: &Selector) -> Result<Vec<(String, Vec<u8>)>, StoreError> {
        let entries = self.entries.read().await;
        Ok(entries
            .iter()
            .filter(|(_, bytes)| !bytes.is_empty() && Self::matches(selector, bytes))
            .map(|(key, bytes)| (key.clone(), bytes.clone()))
            .collect())
    }
}
