//! Profile and identity document repository

use async_trait::async_trait;
use carcatalogue_core::ProfileRepository;
use carcatalogue_domain::{
    ChangePasswordRequest, CreateDocumentRequest, DocumentResponse, Result,
    UpdateDocumentRequest, UpdateProfileRequest, UserResponse,
};

use crate::api::{endpoints, ApiClient};
use crate::session::SessionContext;

pub struct HttpProfileRepository {
    client: ApiClient,
}

impl HttpProfileRepository {
    pub fn new(context: &SessionContext) -> Self {
        Self { client: context.client().clone() }
    }
}

#[async_trait]
impl ProfileRepository for HttpProfileRepository {
    async fn profile(&self) -> Result<UserResponse> {
        self.client.send_json(endpoints::profile()).await
    }

    async fn me(&self) -> Result<()> {
        self.client.send_unit(endpoints::me()).await
    }

    async fn update_profile(&self, request: UpdateProfileRequest) -> Result<()> {
        self.client.send_unit(endpoints::update_profile(&request)?).await
    }

    async fn delete_profile(&self) -> Result<()> {
        self.client.send_unit(endpoints::delete_profile()).await
    }

    async fn change_password(&self, request: ChangePasswordRequest) -> Result<()> {
        self.client.send_unit(endpoints::change_password(&request)?).await
    }

    async fn document(&self) -> Result<DocumentResponse> {
        self.client.send_json(endpoints::document()).await
    }

    async fn create_document(&self, request: CreateDocumentRequest) -> Result<DocumentResponse> {
        self.client.send_json(endpoints::create_document(&request)?).await
    }

    async fn update_document(&self, request: UpdateDocumentRequest) -> Result<DocumentResponse> {
        self.client.send_json(endpoints::update_document(&request)?).await
    }

    async fn delete_document(&self) -> Result<()> {
        self.client.send_unit(endpoints::delete_document()).await
    }
}
