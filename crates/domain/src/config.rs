//! Configuration structures
//!
//! Every section has defaults so a partial file (or no file at all) yields a
//! usable configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ACCESS_COOKIE, DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECS,
    DEFAULT_CREDENTIALS_PATH, DEFAULT_PAGE_SIZE, DEFAULT_REQUEST_TIMEOUT_SECS,
};
use crate::errors::{CatalogueError, Result};

/// Top-level client configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub paging: PagingConfig,
}

/// Remote service connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL every endpoint path is joined onto. Should end with `/`.
    pub base_url: String,
    pub connect_timeout_secs: u64,
    /// Upper bound for a whole request, including reading the body.
    pub request_timeout_secs: u64,
    pub user_agent: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl ApiConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Session persistence settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Location of the persisted credentials record.
    pub credentials_path: PathBuf,
    /// Name of the cookie the server uses to carry the access token.
    pub access_cookie_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            credentials_path: PathBuf::from(DEFAULT_CREDENTIALS_PATH),
            access_cookie_name: DEFAULT_ACCESS_COOKIE.to_string(),
        }
    }
}

/// Paginated list settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagingConfig {
    pub page_size: u32,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self { page_size: DEFAULT_PAGE_SIZE }
    }
}

impl Config {
    /// Check invariants that serde cannot express.
    ///
    /// # Errors
    /// Returns `CatalogueError::Config` describing the first violation.
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(CatalogueError::Config("api.base_url must not be empty".into()));
        }
        if self.api.connect_timeout_secs == 0 {
            return Err(CatalogueError::Config("api.connect_timeout_secs must be positive".into()));
        }
        if self.api.request_timeout_secs == 0 {
            return Err(CatalogueError::Config("api.request_timeout_secs must be positive".into()));
        }
        if self.session.access_cookie_name.trim().is_empty() {
            return Err(CatalogueError::Config(
                "session.access_cookie_name must not be empty".into(),
            ));
        }
        if self.paging.page_size == 0 {
            return Err(CatalogueError::Config("paging.page_size must be positive".into()));
        }
        Ok(())
    }
}
