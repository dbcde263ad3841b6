//! Typed API client
//!
//! Sends an [`ApiRequest`] through the session pipeline and maps the final
//! response onto the domain result.

use std::sync::Arc;

use carcatalogue_domain::{CatalogueError, Result};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use super::request::ApiRequest;
use crate::http::BufferedResponse;
use crate::session::AuthPipeline;

/// Map the pipeline's final response onto the domain result.
fn into_result(response: BufferedResponse) -> Result<bytes::Bytes> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.into_body());
    }
    let body = response.text();
    if status == StatusCode::UNAUTHORIZED {
        warn!(status = status.as_u16(), "request unauthorized");
        return Err(CatalogueError::Unauthorized(body));
    }
    warn!(status = status.as_u16(), "request failed");
    Err(CatalogueError::Status { status: status.as_u16(), body })
}

fn is_blank(body: &[u8]) -> bool {
    body.iter().all(u8::is_ascii_whitespace)
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let decoded = if is_blank(body) {
        serde_json::from_value(serde_json::Value::Null)
    } else {
        serde_json::from_slice(body)
    };
    decoded.map_err(|err| CatalogueError::Decode(format!("Failed to parse response: {err}")))
}

/// Client used by every repository.
#[derive(Clone)]
pub struct ApiClient {
    pipeline: Arc<AuthPipeline>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").field("pipeline", &self.pipeline).finish()
    }
}

impl ApiClient {
    pub fn new(pipeline: Arc<AuthPipeline>) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &AuthPipeline {
        &self.pipeline
    }

    async fn complete(&self, request: &ApiRequest) -> Result<bytes::Bytes> {
        let response = self.pipeline.execute(request).await?;
        let status = response.status().as_u16();
        debug!(status, len = response.body().len(), "response completed");
        into_result(response)
    }

    /// Send `request` and decode a 2xx JSON body into `T`.
    ///
    /// An empty body decodes as JSON `null`, so `T = Option<_>` or `()` accept
    /// it.
    ///
    /// # Errors
    /// `Unauthorized` for 401, `Status` for any other non-2xx, `Decode` for a
    /// malformed body, `Network` when no response was obtained.
    #[instrument(skip(self, request), fields(method = %request.method(), path = %request.path()))]
    pub async fn send_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let body = self.complete(&request).await?;
        decode(&body)
    }

    /// Send `request`, ignoring any 2xx body.
    #[instrument(skip(self, request), fields(method = %request.method(), path = %request.path()))]
    pub async fn send_unit(&self, request: ApiRequest) -> Result<()> {
        self.complete(&request).await.map(|_| ())
    }

    /// Send `request` and decode the body only when one was sent.
    #[instrument(skip(self, request), fields(method = %request.method(), path = %request.path()))]
    pub async fn send_optional<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<Option<T>> {
        let body = self.complete(&request).await?;
        if is_blank(&body) {
            return Ok(None);
        }
        decode(&body).map(Some)
    }
}
