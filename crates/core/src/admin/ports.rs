//! Port interface for administrator endpoints
//!
//! Pass-through only: admin workflows are enforced by the server.

use async_trait::async_trait;
use carcatalogue_domain::{
    AdminCarFilters, AdminContractFilters, AllUserResponse, BrandResponse, CarDetailResponse,
    CarListItemResponse, CarModelResponse, CarStateResponse, ContractResponse, CreateCarModelName,
    CreateCarModelRequest, CreateCarModelsBrand, CreateCarRequest, DocumentResponse, FileUpload,
    ImageResponse, ModelFilters, ModelNameResponse, Page, PageRequest, Result, UpdateCarModelRequest,
    UpdateCarRequest, UpdateCarStateRequest, UserFilters,
};

#[async_trait]
pub trait AdminRepository: Send + Sync {
    // Cars
    async fn cars(
        &self,
        filters: &AdminCarFilters,
        page: &PageRequest,
    ) -> Result<Page<CarListItemResponse>>;

    async fn car(&self, car_id: i64) -> Result<CarDetailResponse>;

    /// Create a car together with its first image.
    async fn create_car(&self, car: CreateCarRequest, image: FileUpload) -> Result<CarDetailResponse>;

    async fn update_car(&self, car_id: i64, request: UpdateCarRequest) -> Result<CarDetailResponse>;

    async fn delete_car(&self, car_id: i64) -> Result<()>;

    async fn update_car_state(
        &self,
        car_id: i64,
        request: UpdateCarStateRequest,
    ) -> Result<CarDetailResponse>;

    async fn car_states(&self) -> Result<Vec<CarStateResponse>>;

    async fn upload_car_image(&self, car_id: i64, image: FileUpload) -> Result<ImageResponse>;

    // Models
    async fn models(
        &self,
        filters: &ModelFilters,
        page: &PageRequest,
    ) -> Result<Page<CarModelResponse>>;

    async fn model(&self, model_id: i64) -> Result<CarModelResponse>;

    async fn create_model(&self, request: CreateCarModelRequest) -> Result<CarModelResponse>;

    async fn update_model(
        &self,
        model_id: i64,
        request: UpdateCarModelRequest,
    ) -> Result<CarModelResponse>;

    async fn delete_model(&self, model_id: i64) -> Result<()>;

    async fn brands(&self) -> Result<Vec<String>>;

    async fn create_brand(&self, request: CreateCarModelsBrand) -> Result<BrandResponse>;

    async fn model_names(&self) -> Result<Vec<String>>;

    async fn create_model_name(&self, request: CreateCarModelName) -> Result<ModelNameResponse>;

    async fn classes(&self) -> Result<Vec<String>>;

    async fn create_class(&self, request: CreateCarModelName) -> Result<ModelNameResponse>;

    // Contracts
    async fn contracts(
        &self,
        filters: &AdminContractFilters,
        page: &PageRequest,
    ) -> Result<Page<ContractResponse>>;

    async fn contract(&self, contract_id: i64) -> Result<ContractResponse>;

    async fn confirm_contract(&self, contract_id: i64) -> Result<ContractResponse>;

    async fn cancel_contract(&self, contract_id: i64) -> Result<()>;

    async fn confirm_cancellation(&self, contract_id: i64) -> Result<()>;

    // Users
    async fn users(&self, filters: &UserFilters, page: &PageRequest) -> Result<Page<AllUserResponse>>;

    async fn user(&self, user_id: i64) -> Result<AllUserResponse>;

    async fn update_user_role(&self, user_id: i64, role_name: &str) -> Result<()>;

    async fn ban_user(&self, user_id: i64) -> Result<()>;

    async fn unban_user(&self, user_id: i64) -> Result<()>;

    // Documents
    async fn documents(
        &self,
        only_unverified: bool,
        page: &PageRequest,
    ) -> Result<Page<DocumentResponse>>;

    async fn verify_document(&self, document_id: i64) -> Result<()>;
}
