//! Session context
//!
//! Built once at startup and handed to every repository. Owns the transport,
//! the cookie jar, the credential store and the pipeline that ties them
//! together.

use std::sync::Arc;

use carcatalogue_core::{Clock, CredentialStore, SystemClock};
use carcatalogue_domain::{CatalogueError, Config, Result};
use tracing::info;
use url::Url;

use super::pipeline::AuthPipeline;
use super::store::FileCredentialStore;
use crate::api::ApiClient;
use crate::errors::InfraError;
use crate::http::{HttpClient, SessionCookieStore};

/// Shared session state for one signed-in (or anonymous) user.
#[derive(Clone)]
pub struct SessionContext {
    config: Arc<Config>,
    credentials: Arc<dyn CredentialStore>,
    cookies: Arc<SessionCookieStore>,
    client: ApiClient,
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("config", &self.config)
            .field("cookies", &self.cookies)
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}

impl SessionContext {
    /// Context backed by the file credential store named in `config`.
    ///
    /// # Errors
    /// `Config` when the base URL is invalid, `Internal` when the HTTP client
    /// cannot be built.
    pub async fn from_config(config: Config) -> Result<Self> {
        let credentials = FileCredentialStore::open(&config.session.credentials_path).await;
        Self::builder(config).credentials(Arc::new(credentials)).build()
    }

    pub fn builder(config: Config) -> SessionContextBuilder {
        SessionContextBuilder { config, credentials: None, clock: None }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn credentials(&self) -> &Arc<dyn CredentialStore> {
        &self.credentials
    }

    pub fn cookies(&self) -> &Arc<SessionCookieStore> {
        &self.cookies
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn page_size(&self) -> u32 {
        self.config.paging.page_size
    }
}

/// Builder for [`SessionContext`]; tests inject the store and clock here.
pub struct SessionContextBuilder {
    config: Config,
    credentials: Option<Arc<dyn CredentialStore>>,
    clock: Option<Arc<dyn Clock>>,
}

impl SessionContextBuilder {
    #[must_use]
    pub fn credentials(mut self, credentials: Arc<dyn CredentialStore>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    #[must_use]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the context. Without an injected store, credentials live in
    /// memory only.
    ///
    /// # Errors
    /// See [`SessionContext::from_config`].
    pub fn build(self) -> Result<SessionContext> {
        let base_url = normalize_base_url(&self.config.api.base_url)?;
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        let credentials = self
            .credentials
            .unwrap_or_else(|| Arc::new(super::store::InMemoryCredentialStore::new()));

        let cookies = Arc::new(SessionCookieStore::new(clock));
        let http = HttpClient::from_config(&self.config.api, cookies.clone())?;
        let pipeline = AuthPipeline::new(
            http,
            base_url.clone(),
            credentials.clone(),
            cookies.clone(),
            self.config.session.access_cookie_name.clone(),
        );

        info!(base_url = %base_url, "session context ready");
        Ok(SessionContext {
            config: Arc::new(self.config),
            credentials,
            cookies,
            client: ApiClient::new(Arc::new(pipeline)),
        })
    }
}

/// Parse `raw` and make sure it ends with `/` so relative paths join under
/// it instead of replacing its last segment.
pub fn normalize_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    let with_slash =
        if trimmed.ends_with('/') { trimmed.to_string() } else { format!("{trimmed}/") };
    let url = Url::parse(&with_slash).map_err(|err| CatalogueError::from(InfraError::from(err)))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(CatalogueError::Config(format!("base URL must be http(s): {trimmed}")));
    }
    Ok(url)
}
