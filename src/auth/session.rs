//! Session handles and the bootstrap paths that produce them.
//!
//! Two ways to end up with a usable session:
//! - `authenticate_and_persist`: fresh login, then store the credential
//!   (the `auth` command).
//! - `resolve_session`: read the sole stored credential, no network call
//!   (every other command).
//!
//! There is no token refresh. An expired token surfaces as a request failure
//! from whatever endpoint uses the handle, and the user re-runs `auth`.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::api::{ApiClient, ApiError};
use crate::config::{ConfigError, CredentialStore, RouterCredential};

/// Authenticated request context for a single command invocation.
/// Never persisted and never cached across invocations; rebuilt from the
/// credential store each run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionHandle {
    pub base_address: String,
    pub auth_token: String,
}

impl SessionHandle {
    fn from_credential(credential: &RouterCredential) -> Self {
        Self {
            base_address: credential.addr.clone(),
            auth_token: credential.token.clone(),
        }
    }

    /// Build an API client carrying this session's token.
    pub fn client(&self) -> Result<ApiClient, ApiError> {
        Ok(ApiClient::new(&self.base_address)?.with_token(self.auth_token.clone()))
    }
}

/// One authentication round-trip against the router at `address`. Returns
/// the issued token; persists nothing.
pub async fn login(address: &str, password: &str) -> Result<String, ApiError> {
    ApiClient::new(address)?.login(password).await
}

/// Login, upsert the credential into `store`, and save the store to `path`.
///
/// Composed so that any failure leaves the on-disk store unchanged: the save
/// only happens after a token has been obtained, and the save itself is an
/// atomic whole-file replace.
pub async fn authenticate_and_persist(
    mut store: CredentialStore,
    address: &str,
    password: &str,
    path: &Path,
) -> Result<CredentialStore> {
    let token = login(address, password)
        .await
        .with_context(|| format!("login against {} failed", address))?;

    store.upsert(RouterCredential {
        addr: address.to_string(),
        password: password.to_string(),
        token,
    });
    store
        .save(path)
        .with_context(|| format!("failed to save credential store to {}", path.display()))?;

    info!(address, "credential stored");
    Ok(store)
}

/// Resolve the one configured router into a session handle without touching
/// the network. Fails with `AmbiguousSelection` unless the store holds
/// exactly one credential.
pub fn resolve_session(store: &CredentialStore) -> Result<SessionHandle, ConfigError> {
    Ok(SessionHandle::from_credential(store.resolve_single()?))
}
