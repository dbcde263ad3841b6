use std::sync::Arc;
use std::time::Duration;

use carcatalogue_domain::constants::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS};
use carcatalogue_domain::{ApiConfig, CatalogueError};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder};
use tracing::debug;

use super::cookies::SessionCookieStore;
use super::response::BufferedResponse;
use crate::errors::InfraError;

/// HTTP client with connect and total-request timeouts.
///
/// Each call is a single attempt. Recovery from an expired session is the
/// pipeline's job; nothing else is retried.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Client configured from the `[api]` section, sharing `cookies`.
    pub fn from_config(
        config: &ApiConfig,
        cookies: Arc<SessionCookieStore>,
    ) -> Result<Self, CatalogueError> {
        let mut builder = Self::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .cookie_store(cookies);
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        builder.build()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute the provided request builder once and read the whole body.
    ///
    /// Any response, whatever its status, is `Ok`. Transport failures and
    /// timeouts, including one hit while reading the body, map to
    /// [`CatalogueError::Network`].
    pub async fn send(&self, builder: RequestBuilder) -> Result<BufferedResponse, CatalogueError> {
        let request = builder.build().map_err(|err| CatalogueError::from(InfraError::from(err)))?;

        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, path = %url.path(), "sending HTTP request");

        let response = match self.client.execute(request).await {
            Ok(response) => response,
            Err(err) => {
                debug!(%method, path = %url.path(), error = %err, "HTTP request failed");
                return Err(InfraError::from(err).into());
            }
        };

        let status = response.status();
        let headers = response.headers().clone();
        match response.bytes().await {
            Ok(body) => {
                debug!(%method, path = %url.path(), %status, len = body.len(), "received HTTP response");
                Ok(BufferedResponse::new(status, headers, body))
            }
            Err(err) => {
                debug!(%method, path = %url.path(), %status, error = %err, "HTTP body read failed");
                Err(InfraError::from(err).into())
            }
        }
    }
}

/// Builder for [`HttpClient`].
pub struct HttpClientBuilder {
    connect_timeout: Duration,
    timeout: Duration,
    user_agent: Option<String>,
    default_headers: Option<reqwest::header::HeaderMap>,
    cookies: Option<Arc<SessionCookieStore>>,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            user_agent: None,
            default_headers: None,
            cookies: None,
        }
    }
}

impl std::fmt::Debug for HttpClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClientBuilder")
            .field("connect_timeout", &self.connect_timeout)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("cookies", &self.cookies.is_some())
            .finish_non_exhaustive()
    }
}

impl HttpClientBuilder {
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Upper bound for a whole request, body included.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn default_headers(mut self, headers: reqwest::header::HeaderMap) -> Self {
        self.default_headers = Some(headers);
        self
    }

    /// Cookie jar that absorbs `Set-Cookie` headers and supplies `Cookie`.
    pub fn cookie_store(mut self, cookies: Arc<SessionCookieStore>) -> Self {
        self.cookies = Some(cookies);
        self
    }

    pub fn build(self) -> Result<HttpClient, CatalogueError> {
        let mut builder = ReqwestClient::builder()
            .connect_timeout(self.connect_timeout)
            .timeout(self.timeout)
            .no_proxy();

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        if let Some(headers) = self.default_headers {
            builder = builder.default_headers(headers);
        }

        if let Some(cookies) = self.cookies {
            builder = builder.cookie_provider(cookies);
        }

        let client = builder.build().map_err(|err| CatalogueError::from(InfraError::from(err)))?;

        Ok(HttpClient { client })
    }
}
