//! Port interface for credential persistence

use async_trait::async_trait;
use carcatalogue_domain::{CachedIdentity, Result, Session};

/// Persists the session token and the cached display identity.
///
/// Implementations must be safe under concurrent use: a write in progress is
/// never observed half-done by a reader, and `clear` removes the token and
/// the identity together.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Current session. A missing or unreadable record is the signed-out
    /// session, never an error.
    async fn get(&self) -> Session;

    /// Replace the stored token, keeping the cached identity.
    async fn save_token(&self, token: &str) -> Result<()>;

    /// Replace the cached identity, keeping the token.
    async fn save_identity(&self, identity: CachedIdentity) -> Result<()>;

    /// Cached identity; empty when nothing was cached.
    async fn identity(&self) -> CachedIdentity;

    /// Remove the token and the cached identity.
    async fn clear(&self) -> Result<()>;
}
