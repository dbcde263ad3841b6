//! Sign-in, registration and sign-out

use std::sync::Arc;

use carcatalogue_core::{AuthRepository, BestEffort, CredentialStore, ProfileRepository};
use carcatalogue_domain::validation::{validate_login, validate_registration, RegistrationForm};
use carcatalogue_domain::{AuthRequest, CachedIdentity, RegistrationRequest, Result, UserResponse};
use parking_lot::Mutex;
use tracing::{info, warn};

use super::state::{ScreenError, UiState};

/// Drives the login and registration screens.
///
/// The state holds the identity shown after a successful sign-in; `Empty`
/// means signed out.
pub struct AuthController {
    auth: Arc<dyn AuthRepository>,
    profile: Arc<dyn ProfileRepository>,
    credentials: Arc<dyn CredentialStore>,
    state: Mutex<UiState<CachedIdentity>>,
}

impl AuthController {
    pub fn new(
        auth: Arc<dyn AuthRepository>,
        profile: Arc<dyn ProfileRepository>,
        credentials: Arc<dyn CredentialStore>,
    ) -> Self {
        Self { auth, profile, credentials, state: Mutex::new(UiState::Empty) }
    }

    pub fn state(&self) -> UiState<CachedIdentity> {
        self.state.lock().clone()
    }

    pub async fn is_signed_in(&self) -> bool {
        self.credentials.get().await.is_authenticated()
    }

    /// Sign in and cache the user's identity.
    ///
    /// The identity refresh after a successful login is best-effort: when the
    /// profile cannot be fetched the login still succeeds with whatever was
    /// cached.
    ///
    /// # Errors
    /// Validation failures are reported before any network call.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> std::result::Result<CachedIdentity, ScreenError> {
        if let Err(err) = validate_login(username, password) {
            return Err(self.fail(err.into()));
        }
        *self.state.lock() = UiState::Loading;

        let username = username.trim();
        let request = AuthRequest { username: username.to_string(), password: password.to_string() };
        if let Err(err) = self.auth.login(request).await {
            warn!(error = %err, "auth.login_failed");
            return Err(self.fail(err.into()));
        }

        let identity = match BestEffort::from_result(
            "identity_refresh",
            self.refresh_identity(username).await,
        ) {
            BestEffort::Done(identity) => identity,
            BestEffort::Skipped(_) => self.credentials.identity().await,
        };

        info!(user_id = ?identity.user_id, "auth.signed_in");
        *self.state.lock() = UiState::Success(identity.clone());
        Ok(identity)
    }

    /// Create an account. The user still has to sign in afterwards.
    ///
    /// # Errors
    /// Validation failures are reported before any network call.
    pub async fn register(
        &self,
        form: &RegistrationForm,
    ) -> std::result::Result<UserResponse, ScreenError> {
        validate_registration(form)?;

        let request = RegistrationRequest::new(
            form.login.trim(),
            form.password.trim(),
            form.last_name.trim(),
            form.email.trim(),
        );
        let user = self.auth.register(request).await.map_err(|err| {
            warn!(error = %err, "auth.registration_failed");
            ScreenError::from(err)
        })?;
        info!(user_id = user.id, "auth.registered");
        Ok(user)
    }

    /// Sign out. The server is told best-effort; local credentials are
    /// always removed.
    ///
    /// # Errors
    /// Only a failure to clear the local credentials is reported.
    pub async fn logout(&self) -> std::result::Result<(), ScreenError> {
        BestEffort::from_result("remote_logout", self.auth.logout().await).ignore();

        let cleared = self.credentials.clear().await;
        *self.state.lock() = UiState::Empty;
        cleared.map_err(ScreenError::from)?;
        info!("auth.signed_out");
        Ok(())
    }

    async fn refresh_identity(&self, username: &str) -> Result<CachedIdentity> {
        let provisional =
            CachedIdentity { display_name: Some(username.to_string()), ..CachedIdentity::default() };
        self.credentials.save_identity(provisional.clone()).await?;

        let profile = self.profile.profile().await?;
        let identity = provisional.merged(CachedIdentity {
            user_id: Some(profile.id),
            display_name: Some(profile.full_name()),
            email: Some(profile.email),
        });
        self.credentials.save_identity(identity.clone()).await?;
        Ok(identity)
    }

    fn fail(&self, err: ScreenError) -> ScreenError {
        *self.state.lock() = UiState::Error(err.clone());
        err
    }
}
