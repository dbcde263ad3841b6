//! Authenticated-fetch pipeline
//!
//! Every request goes through [`AuthPipeline::execute`]:
//!
//! 1. Login, registration and refresh are sent as-is.
//! 2. Anything else gets `Authorization: Bearer <token>` when a token is
//!    stored.
//! 3. A 401 on a request that carried a token triggers one refresh. If the
//!    refresh succeeds the request is rebuilt and sent again, once. If it
//!    fails, is rejected or times out, the stored session is cleared and the
//!    original 401 is returned.
//!
//! Responses are read in full before anything else happens, so the 401 held
//! across a refresh no longer depends on the request timeout.
//!
//! The pipeline never turns a status into an error; [`crate::ApiClient`]
//! does that.

use std::sync::Arc;

use carcatalogue_core::CredentialStore;
use carcatalogue_domain::Result;
use reqwest::StatusCode;
use tracing::{debug, info, warn};
use url::Url;

use crate::api::{endpoints, ApiRequest};
use crate::http::{BufferedResponse, HttpClient, SessionCookieStore};

pub struct AuthPipeline {
    http: HttpClient,
    base_url: Url,
    credentials: Arc<dyn CredentialStore>,
    cookies: Arc<SessionCookieStore>,
    access_cookie_name: String,
}

impl std::fmt::Debug for AuthPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthPipeline")
            .field("base_url", &self.base_url.as_str())
            .field("access_cookie_name", &self.access_cookie_name)
            .finish_non_exhaustive()
    }
}

impl AuthPipeline {
    pub fn new(
        http: HttpClient,
        base_url: Url,
        credentials: Arc<dyn CredentialStore>,
        cookies: Arc<SessionCookieStore>,
        access_cookie_name: impl Into<String>,
    ) -> Self {
        Self { http, base_url, credentials, cookies, access_cookie_name: access_cookie_name.into() }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn credentials(&self) -> &Arc<dyn CredentialStore> {
        &self.credentials
    }

    pub fn cookies(&self) -> &Arc<SessionCookieStore> {
        &self.cookies
    }

    /// Send `request`, recovering once from an expired session.
    ///
    /// # Errors
    /// Only when no response was obtained for the request itself. Refresh
    /// failures are absorbed: the original 401 comes back as `Ok`.
    pub async fn execute(&self, request: &ApiRequest) -> Result<BufferedResponse> {
        if request.bypasses_auth() {
            let response = self.send(request, None).await?;
            if response.status().is_success() {
                self.sync_token_cookie().await;
            }
            return Ok(response);
        }

        let session = self.credentials.get().await;
        let Some(token) = session.token() else {
            return self.send(request, None).await;
        };

        let response = self.send(request, Some(token)).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        info!(path = %request.path(), "session.unauthorized, attempting refresh");
        if !self.refresh().await {
            self.clear_session().await;
            return Ok(response);
        }

        let refreshed = self.credentials.get().await;
        debug!(path = %request.path(), authenticated = refreshed.is_authenticated(), "session.retry");
        self.send(request, refreshed.token()).await
    }

    async fn send(&self, request: &ApiRequest, bearer: Option<&str>) -> Result<BufferedResponse> {
        let builder = request.to_builder(&self.http, &self.base_url, bearer)?;
        self.http.send(builder).await
    }

    /// Call the refresh endpoint. `true` when the server accepted it.
    async fn refresh(&self) -> bool {
        match self.send(&endpoints::refresh(), None).await {
            Ok(response) if response.status().is_success() => {
                info!(status = response.status().as_u16(), "session.refreshed");
                self.sync_token_cookie().await;
                true
            }
            Ok(response) => {
                warn!(status = response.status().as_u16(), "session.refresh_rejected");
                false
            }
            Err(err) => {
                warn!(error = %err, "session.refresh_failed");
                false
            }
        }
    }

    /// Copy the access-token cookie, when the server set one, into the
    /// credential store so the next bearer header carries it.
    pub async fn sync_token_cookie(&self) {
        let Some(token) = self.cookies.value_for_host(&self.base_url, &self.access_cookie_name)
        else {
            debug!(cookie = %self.access_cookie_name, "session.no_token_cookie");
            return;
        };
        if token.trim().is_empty() {
            return;
        }
        match self.credentials.save_token(&token).await {
            Ok(()) => debug!(cookie = %self.access_cookie_name, "session.token_synced"),
            Err(err) => warn!(error = %err, "session.token_sync_failed"),
        }
    }

    async fn clear_session(&self) {
        info!("session.cleared after failed refresh");
        if let Err(err) = self.credentials.clear().await {
            warn!(error = %err, "session.clear_failed");
        }
    }
}
