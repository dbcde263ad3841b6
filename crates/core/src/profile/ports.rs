//! Port interface for the signed-in user's profile and identity document

use async_trait::async_trait;
use carcatalogue_domain::{
    ChangePasswordRequest, CreateDocumentRequest, DocumentResponse, Result,
    UpdateDocumentRequest, UpdateProfileRequest, UserResponse,
};

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn profile(&self) -> Result<UserResponse>;

    /// Cheap authenticated check; succeeds while the session is valid.
    async fn me(&self) -> Result<()>;

    async fn update_profile(&self, request: UpdateProfileRequest) -> Result<()>;

    async fn delete_profile(&self) -> Result<()>;

    async fn change_password(&self, request: ChangePasswordRequest) -> Result<()>;

    async fn document(&self) -> Result<DocumentResponse>;

    async fn create_document(&self, request: CreateDocumentRequest) -> Result<DocumentResponse>;

    async fn update_document(&self, request: UpdateDocumentRequest) -> Result<DocumentResponse>;

    async fn delete_document(&self) -> Result<()>;
}
