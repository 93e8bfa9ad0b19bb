//! Document plumbing shared by the services
//!
//! All documents travel as JSON bytes. An absent key and an empty value
//! are both treated as "no document".

use serde::de::DeserializeOwned;
use serde::Serialize;

use emr_core::error::{LedgerError, LedgerResult};
use emr_core::store::{Selector, StateStore};
use emr_core::types::DocType;

/// Serialize `doc` and store it under `key`.
pub(crate) async fn put_doc<T: Serialize>(
    store: &dyn StateStore,
    key: &str,
    doc: &T,
) -> LedgerResult<()> {
    let bytes = serde_json::to_vec(doc)?;
    store.put(key, bytes).await?;
    Ok(())
}

/// Whether fetched bytes hold a document.
pub(crate) fn present(bytes: &Option<Vec<u8>>) -> bool {
    matches!(bytes, Some(b) if !b.is_empty())
}

/// Decode fetched bytes, mapping absence to `missing`.
pub(crate) fn decode_doc<T: DeserializeOwned>(
    bytes: Option<Vec<u8>>,
    missing: LedgerError,
) -> LedgerResult<T> {
    match bytes {
        Some(b) if !b.is_empty() => Ok(serde_json::from_slice(&b)?),
        _ => Err(missing),
    }
}

/// Fetch and decode the document at `key`, mapping absence to `missing`.
pub(crate) async fn get_doc<T: DeserializeOwned>(
    store: &dyn StateStore,
    key: &str,
    missing: LedgerError,
) -> LedgerResult<T> {
    let bytes = store.get(key).await?;
    decode_doc(bytes, missing)
}

/// All documents of one kind, decoded, keyed by storage key.
pub(crate) async fn list_by_doc_type<T: DeserializeOwned>(
    store: &dyn StateStore,
    doc_type: DocType,
) -> LedgerResult<Vec<(String, T)>> {
    let rows = store.query(&Selector::for_doc_type(doc_type)).await?;
    let mut docs = Vec::with_capacity(rows.len());
    for (key, bytes) in rows {
        docs.push((key, serde_json::from_slice(&bytes)?));
    }
    Ok(docs)
}
