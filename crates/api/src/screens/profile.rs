//! Profile screen: account details, password and identity document

use std::sync::Arc;

use carcatalogue_core::{BestEffort, CredentialStore, ProfileRepository};
use carcatalogue_domain::validation::validate_password_change;
use carcatalogue_domain::{
    CachedIdentity, CatalogueError, ChangePasswordRequest, CreateDocumentRequest,
    DocumentResponse, UpdateDocumentRequest, UpdateProfileRequest, UserResponse,
};
use parking_lot::Mutex;
use serde::Serialize;
use tracing::{info, warn};

use super::state::{ScreenError, UiState};

/// What the profile header shows.
///
/// `profile` is `None` when the server could not be reached and the cached
/// identity is shown instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileView {
    pub identity: CachedIdentity,
    pub profile: Option<UserResponse>,
}

impl ProfileView {
    pub fn is_cached(&self) -> bool {
        self.profile.is_none()
    }
}

pub struct ProfileController {
    profile: Arc<dyn ProfileRepository>,
    credentials: Arc<dyn CredentialStore>,
    state: Mutex<UiState<ProfileView>>,
    document: Mutex<UiState<DocumentResponse>>,
}

impl ProfileController {
    pub fn new(profile: Arc<dyn ProfileRepository>, credentials: Arc<dyn CredentialStore>) -> Self {
        Self {
            profile,
            credentials,
            state: Mutex::new(UiState::Loading),
            document: Mutex::new(UiState::Loading),
        }
    }

    pub fn state(&self) -> UiState<ProfileView> {
        self.state.lock().clone()
    }

    pub fn document_state(&self) -> UiState<DocumentResponse> {
        self.document.lock().clone()
    }

    /// Fetch the profile and refresh the cached identity. When the fetch
    /// fails the cached identity is shown, unless the session is gone or
    /// nothing was cached.
    pub async fn load(&self) -> UiState<ProfileView> {
        *self.state.lock() = UiState::Loading;

        let state = match self.profile.profile().await {
            Ok(user) => {
                let identity = self.credentials.identity().await.merged(CachedIdentity {
                    user_id: Some(user.id),
                    display_name: Some(user.full_name()),
                    email: Some(user.email.clone()),
                });
                BestEffort::from_result(
                    "identity_cache",
                    self.credentials.save_identity(identity.clone()).await,
                )
                .ignore();
                UiState::Success(ProfileView { identity, profile: Some(user) })
            }
            Err(err) => self.fallback(err).await,
        };

        self.state.lock().clone_from(&state);
        state
    }

    /// # Errors
    /// Returns the server's rejection unchanged.
    pub async fn update_profile(&self, request: UpdateProfileRequest) -> Result<(), ScreenError> {
        self.profile.update_profile(request).await?;
        info!("profile.updated");
        self.load().await;
        Ok(())
    }

    /// # Errors
    /// Validation failures are reported before any network call.
    pub async fn change_password(
        &self,
        old_password: &str,
        new_password: &str,
        confirm: &str,
    ) -> Result<(), ScreenError> {
        validate_password_change(old_password, new_password, confirm)?;
        self.profile
            .change_password(ChangePasswordRequest {
                old_password: old_password.to_string(),
                new_password: new_password.to_string(),
            })
            .await?;
        info!("profile.password_changed");
        Ok(())
    }

    /// Fetch the identity document. A user without one sees `Empty`.
    pub async fn load_document(&self) -> UiState<DocumentResponse> {
        let state = match self.profile.document().await {
            Ok(document) => UiState::Success(document),
            Err(CatalogueError::Status { status: 404, .. }) => UiState::Empty,
            Err(err) => UiState::Error(err.into()),
        };
        self.document.lock().clone_from(&state);
        state
    }

    /// Create the document, or update it when one is already on file.
    ///
    /// # Errors
    /// Returns the server's rejection unchanged.
    pub async fn save_document(
        &self,
        request: CreateDocumentRequest,
    ) -> Result<DocumentResponse, ScreenError> {
        let exists = self.document.lock().value().is_some();
        let saved = if exists {
            self.profile
                .update_document(UpdateDocumentRequest {
                    document_type_id: Some(request.document_type_id),
                    series: Some(request.series),
                    number: Some(request.number),
                    date_of_issue: Some(request.date_of_issue),
                    issuing_authority: Some(request.issuing_authority),
                })
                .await?
        } else {
            self.profile.create_document(request).await?
        };
        info!(document_id = saved.id, updated = exists, "profile.document_saved");
        *self.document.lock() = UiState::Success(saved.clone());
        Ok(saved)
    }

    /// # Errors
    /// Returns the server's rejection unchanged.
    pub async fn delete_document(&self) -> Result<(), ScreenError> {
        self.profile.delete_document().await?;
        *self.document.lock() = UiState::Empty;
        info!("profile.document_deleted");
        Ok(())
    }

    async fn fallback(&self, err: CatalogueError) -> UiState<ProfileView> {
        if err.is_unauthorized() {
            return UiState::Error(err.into());
        }
        let identity = self.credentials.identity().await;
        if identity.is_empty() {
            return UiState::Error(err.into());
        }
        warn!(error = %err, "profile.showing_cached_identity");
        UiState::Success(ProfileView { identity, profile: None })
    }
}
