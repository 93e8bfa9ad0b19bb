//! State store SPI
//!
//! The underlying key-value ledger is an external collaborator: it
//! provides get/put on opaque bytes plus a field-match selector query
//! over stored documents. Consensus, replication and durability all live
//! behind this seam.
//!
//! Absence is signaled by `Ok(None)` (or empty bytes), never by an
//! error. Queries return every match as a (key, raw bytes) pair in the
//! store's native iteration order, fully materialized; there is no
//! resumable iteration at this layer.

use async_trait::async_trait;
use serde_json::{json, Map, Value};
use thiserror::Error;

use crate::types::DocType;

/// State store errors; backend-specific causes are flattened to strings.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

/// Field-match selector over stored documents
///
/// Criteria are ANDed equality matches on top-level document fields.
/// [`Selector::to_query_json`] renders the `{"selector": {...}}` document
/// consumed by stores that take JSON selectors.
#[derive(Debug, Clone, Default)]
pub struct Selector {
    criteria: Map<String, Value>,
}

impl Selector {
    /// Selector matching every document of one kind.
    pub fn for_doc_type(doc_type: DocType) -> Self {
        let mut criteria = Map::new();
        criteria.insert("docType".to_string(), Value::String(doc_type.as_str().to_string()));
        Self { criteria }
    }

    /// Add an equality criterion on a top-level field.
    pub fn field(mut self, name: &str, value: impl Into<String>) -> Self {
        self.criteria.insert(name.to_string(), Value::String(value.into()));
        self
    }

    pub fn criteria(&self) -> &Map<String, Value> {
        &self.criteria
    }

    pub fn to_query_json(&self) -> Value {
        json!({ "selector": self.criteria })
    }
}

/// Key-value state store with selector query support
///
/// Implementations must be safe to share across invocations; the ledger
/// services hold one behind an `Arc`.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Fetch the bytes stored under `key`, `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Store `value` under `key`, overwriting any previous value.
    async fn put(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;

    /// All documents matching `selector`, in native iteration order.
    async fn query(&self, selector: &Selector) -> Result<Vec<(String, Vec<u8>)>, StoreError>;
}
