//! Credential stores
//!
//! [`FileCredentialStore`] keeps one JSON record on disk and caches it in
//! memory. [`InMemoryCredentialStore`] has the same contract but forgets
//! everything when the process exits.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use carcatalogue_core::CredentialStore;
use carcatalogue_domain::{CachedIdentity, CatalogueError, Result, Session, StoredCredentials};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use crate::errors::InfraError;

/* -------------------------------------------------------------------------- */
/* File-backed store                                                           */
/* -------------------------------------------------------------------------- */

/// Credential record persisted as JSON at a fixed path.
///
/// Writes go to a sibling temp file that is renamed over the record while
/// the write lock is held, so a reader sees either the old or the new record.
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
    cached: RwLock<StoredCredentials>,
}

impl FileCredentialStore {
    /// Open the store at `path`, loading any existing record.
    ///
    /// A missing or unreadable record starts the store signed out.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub async fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let cached = match read_record(&path).await {
            Ok(Some(record)) => {
                debug!(authenticated = record.session().is_authenticated(), "credentials loaded");
                record
            }
            Ok(None) => StoredCredentials::default(),
            Err(err) => {
                warn!(error = %err, "credentials record unreadable, starting signed out");
                StoredCredentials::default()
            }
        };
        Self { path, cached: RwLock::new(cached) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn update<F>(&self, mutate: F) -> Result<()>
    where
        F: FnOnce(&mut StoredCredentials),
    {
        let mut guard = self.cached.write().await;
        let mut next = guard.clone();
        mutate(&mut next);
        write_record(&self.path, &next).await?;
        *guard = next;
        Ok(())
    }
}

async fn read_record(path: &Path) -> std::result::Result<Option<StoredCredentials>, InfraError> {
    let data = match fs::read(path).await {
        Ok(data) => data,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    Ok(Some(serde_json::from_slice(&data)?))
}

async fn write_record(path: &Path, record: &StoredCredentials) -> Result<()> {
    let data = serde_json::to_vec_pretty(record).map_err(|err| CatalogueError::from(InfraError::from(err)))?;

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await.map_err(|err| CatalogueError::from(InfraError::from(err)))?;
    }

    let temp_path = path.with_extension("tmp");
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(0o600);

    let write = async {
        let mut file = options.open(&temp_path).await?;
        file.write_all(&data).await?;
        file.sync_all().await?;
        drop(file);
        fs::rename(&temp_path, path).await
    };
    write.await.map_err(|err| CatalogueError::from(InfraError::from(err)))?;

    debug!(path = %path.display(), bytes = data.len(), "credentials persisted");
    Ok(())
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn get(&self) -> Session {
        self.cached.read().await.session()
    }

    async fn save_token(&self, token: &str) -> Result<()> {
        self.update(|record| record.token = Some(token.to_string())).await
    }

    async fn save_identity(&self, identity: CachedIdentity) -> Result<()> {
        self.update(|record| record.set_identity(identity)).await
    }

    async fn identity(&self) -> CachedIdentity {
        self.cached.read().await.identity()
    }

    async fn clear(&self) -> Result<()> {
        let mut guard = self.cached.write().await;
        // Signed out in memory even when the record cannot be removed.
        *guard = StoredCredentials::default();
        match fs::remove_file(&self.path).await {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => {
                warn!(error = %err, "credentials record not removed");
                return Err(InfraError::from(err).into());
            }
        }
        info!("credentials cleared");
        Ok(())
    }
}

/* -------------------------------------------------------------------------- */
/* In-memory store                                                             */
/* -------------------------------------------------------------------------- */

/// Process-lifetime credential store.
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    record: RwLock<StoredCredentials>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `token`.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            record: RwLock::new(StoredCredentials { token: Some(token.into()), ..Default::default() }),
        }
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn get(&self) -> Session {
        self.record.read().await.session()
    }

    async fn save_token(&self, token: &str) -> Result<()> {
        self.record.write().await.token = Some(token.to_string());
        Ok(())
    }

    async fn save_identity(&self, identity: CachedIdentity) -> Result<()> {
        self.record.write().await.set_identity(identity);
        Ok(())
    }

    async fn identity(&self) -> CachedIdentity {
        self.record.read().await.identity()
    }

    async fn clear(&self) -> Result<()> {
        *self.record.write().await = StoredCredentials::default();
        Ok(())
    }
}
