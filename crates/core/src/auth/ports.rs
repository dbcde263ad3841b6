//! Port interface for authentication calls

use async_trait::async_trait;
use carcatalogue_domain::{AuthRequest, RegistrationRequest, Result, UserResponse};

#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// Sign in. On success the session token is already stored.
    async fn login(&self, request: AuthRequest) -> Result<()>;

    async fn register(&self, request: RegistrationRequest) -> Result<UserResponse>;

    /// Tell the server to end the session. Local credentials are untouched.
    async fn logout(&self) -> Result<()>;

    /// Ask the server to email a password reset code.
    async fn request_password_reset(&self, email: &str) -> Result<()>;

    /// Set a new password using the emailed code.
    async fn reset_password(&self, code: &str, request: RegistrationRequest) -> Result<()>;

    /// Ask the server to send an email verification code.
    async fn request_email_verification(&self) -> Result<()>;

    async fn confirm_email(&self, code: &str) -> Result<()>;
}
