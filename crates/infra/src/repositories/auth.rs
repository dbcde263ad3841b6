//! Authentication repository

use std::sync::Arc;

use async_trait::async_trait;
use carcatalogue_core::{AuthRepository, CredentialStore};
use carcatalogue_domain::{
    AuthRequest, JwtResponse, RegistrationRequest, ResetPasswordRequest, Result, UserResponse,
};
use tracing::{info, instrument, warn};

use crate::api::{endpoints, ApiClient};
use crate::session::SessionContext;

fn token_body(body: serde_json::Value) -> Option<JwtResponse> {
    serde_json::from_value(body).ok()
}

/// Sign-in, registration and account recovery over HTTP.
pub struct HttpAuthRepository {
    client: ApiClient,
    credentials: Arc<dyn CredentialStore>,
}

impl HttpAuthRepository {
    pub fn new(context: &SessionContext) -> Self {
        Self { client: context.client().clone(), credentials: context.credentials().clone() }
    }
}

#[async_trait]
impl AuthRepository for HttpAuthRepository {
    #[instrument(skip_all, fields(username = %request.username))]
    async fn login(&self, request: AuthRequest) -> Result<()> {
        let body: Option<serde_json::Value> =
            self.client.send_optional(endpoints::login(&request)?).await?;

        // The cookie, when set, is already synced by the pipeline; a token in
        // the body takes precedence. Any other body is ignored.
        if let Some(jwt) = body.and_then(token_body).filter(|jwt| !jwt.token.trim().is_empty()) {
            self.credentials.save_token(&jwt.token).await?;
        }

        if self.credentials.get().await.is_authenticated() {
            info!("login succeeded");
        } else {
            warn!("login succeeded without a token cookie or body");
        }
        Ok(())
    }

    async fn register(&self, request: RegistrationRequest) -> Result<UserResponse> {
        self.client.send_json(endpoints::register(&request)?).await
    }

    async fn logout(&self) -> Result<()> {
        self.client.send_unit(endpoints::logout()).await
    }

    async fn request_password_reset(&self, email: &str) -> Result<()> {
        let request = ResetPasswordRequest { email: email.to_string() };
        self.client.send_unit(endpoints::request_password_reset(&request)?).await
    }

    async fn reset_password(&self, code: &str, request: RegistrationRequest) -> Result<()> {
        self.client.send_unit(endpoints::reset_password(code, &request)?).await
    }

    async fn request_email_verification(&self) -> Result<()> {
        self.client.send_unit(endpoints::request_email_verification()).await
    }

    async fn confirm_email(&self, code: &str) -> Result<()> {
        self.client.send_unit(endpoints::confirm_email(code)).await
    }
}
