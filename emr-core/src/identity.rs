//! Caller identity resolution
//!
//! Callers present a distinguished-name style credential, e.g.
//! `x509::/C=US/O=org1/CN=e1::client/...`. The caller id is the portion
//! of the `CN=` component before the `::` separator. A credential with
//! no `CN=` component is rejected outright rather than guessed at.

use async_trait::async_trait;
use thiserror::Error;

use crate::types::EntityId;

const COMMON_NAME_PREFIX: &str = "CN=";
const ID_SEPARATOR: &str = "::";

/// Identity resolution errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    #[error("credential has no CN= component")]
    MissingCommonName,

    #[error("credential CN= component yields an empty caller id")]
    EmptyCallerId,
}

/// Extract the caller id from a DN-style credential string.
pub fn caller_id_from_credential(credential: &str) -> Result<EntityId, IdentityError> {
    let common_name = credential
        .split('/')
        .find_map(|part| part.strip_prefix(COMMON_NAME_PREFIX))
        .ok_or(IdentityError::MissingCommonName)?;

    let id = common_name.split(ID_SEPARATOR).next().unwrap_or("");
    if id.is_empty() {
        return Err(IdentityError::EmptyCallerId);
    }
    Ok(EntityId::new(id))
}

/// Resolves the invoking principal's identifier from its credential.
///
/// Supplied by the hosting environment, one resolver per connection.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    async fn resolve_caller_id(&self) -> Result<EntityId, IdentityError>;
}

/// Identity resolver over a fixed credential string.
#[derive(Debug, Clone)]
pub struct CredentialIdentity {
    credential: String,
}

impl CredentialIdentity {
    pub fn new(credential: impl Into<String>) -> Self {
        Self {
            credential: credential.into(),
        }
    }
}

#[async_trait]
impl IdentityResolver for CredentialIdentity {
    async fn resolve_caller_id(&self) -> Result<EntityId, IdentityError> {
        caller_id_from_credential(&self.credential)
    }
}
