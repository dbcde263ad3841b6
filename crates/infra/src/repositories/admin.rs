//! Administrator repository
//!
//! Pass-through to the `api/admin/...` endpoints. The server enforces the
//! admin role; a non-admin session gets `Status { status: 403, .. }`.

use async_trait::async_trait;
use carcatalogue_core::AdminRepository;
use carcatalogue_domain::{
    AdminCarFilters, AdminContractFilters, AllUserResponse, BrandResponse, CarDetailResponse,
    CarListItemResponse, CarModelResponse, CarStateResponse, ContractResponse, CreateCarModelName,
    CreateCarModelRequest, CreateCarModelsBrand, CreateCarRequest, DocumentResponse, FileUpload,
    ImageResponse, ModelFilters, ModelNameResponse, Page, PageRequest, PagedModel, Result,
    RoleRequest, UpdateCarModelRequest, UpdateCarRequest, UpdateCarStateRequest, UserFilters,
};
use serde::de::DeserializeOwned;
use tracing::info;

use crate::api::{endpoints, ApiClient, ApiRequest};
use crate::session::SessionContext;

pub struct HttpAdminRepository {
    client: ApiClient,
}

impl HttpAdminRepository {
    pub fn new(context: &SessionContext) -> Self {
        Self { client: context.client().clone() }
    }

    async fn page<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<Page<T>> {
        let paged: PagedModel<T> = self.client.send_json(request).await?;
        Ok(paged.into())
    }
}

#[async_trait]
impl AdminRepository for HttpAdminRepository {
    /* ---------------------------------------------------------------------- */
    /* Cars                                                                    */
    /* ---------------------------------------------------------------------- */

    async fn cars(
        &self,
        filters: &AdminCarFilters,
        page: &PageRequest,
    ) -> Result<Page<CarListItemResponse>> {
        self.page(endpoints::admin_cars(filters, page)).await
    }

    async fn car(&self, car_id: i64) -> Result<CarDetailResponse> {
        self.client.send_json(endpoints::admin_car(car_id)).await
    }

    async fn create_car(&self, car: CreateCarRequest, image: FileUpload) -> Result<CarDetailResponse> {
        let created: CarDetailResponse = self.client.send_json(endpoints::create_car(&car, image)?).await?;
        info!(car_id = created.id, "car created");
        Ok(created)
    }

    async fn update_car(&self, car_id: i64, request: UpdateCarRequest) -> Result<CarDetailResponse> {
        self.client.send_json(endpoints::update_car(car_id, &request)?).await
    }

    async fn delete_car(&self, car_id: i64) -> Result<()> {
        self.client.send_unit(endpoints::delete_car(car_id)).await
    }

    async fn update_car_state(
        &self,
        car_id: i64,
        request: UpdateCarStateRequest,
    ) -> Result<CarDetailResponse> {
        self.client.send_json(endpoints::update_car_state(car_id, &request)?).await
    }

    async fn car_states(&self) -> Result<Vec<CarStateResponse>> {
        self.client.send_json(endpoints::car_states()).await
    }

    async fn upload_car_image(&self, car_id: i64, image: FileUpload) -> Result<ImageResponse> {
        self.client.send_json(endpoints::upload_car_image(car_id, image)).await
    }

    /* ---------------------------------------------------------------------- */
    /* Models                                                                  */
    /* ---------------------------------------------------------------------- */

    async fn models(
        &self,
        filters: &ModelFilters,
        page: &PageRequest,
    ) -> Result<Page<CarModelResponse>> {
        self.page(endpoints::admin_models(filters, page)).await
    }

    async fn model(&self, model_id: i64) -> Result<CarModelResponse> {
        self.client.send_json(endpoints::admin_model(model_id)).await
    }

    async fn create_model(&self, request: CreateCarModelRequest) -> Result<CarModelResponse> {
        self.client.send_json(endpoints::create_model(&request)?).await
    }

    async fn update_model(
        &self,
        model_id: i64,
        request: UpdateCarModelRequest,
    ) -> Result<CarModelResponse> {
        self.client.send_json(endpoints::update_model(model_id, &request)?).await
    }

    async fn delete_model(&self, model_id: i64) -> Result<()> {
        self.client.send_unit(endpoints::delete_model(model_id)).await
    }

    async fn brands(&self) -> Result<Vec<String>> {
        self.client.send_json(endpoints::admin_brands()).await
    }

    async fn create_brand(&self, request: CreateCarModelsBrand) -> Result<BrandResponse> {
        self.client.send_json(endpoints::create_brand(&request)?).await
    }

    async fn model_names(&self) -> Result<Vec<String>> {
        self.client.send_json(endpoints::admin_model_names()).await
    }

    async fn create_model_name(&self, request: CreateCarModelName) -> Result<ModelNameResponse> {
        self.client.send_json(endpoints::create_model_name(&request)?).await
    }

    async fn classes(&self) -> Result<Vec<String>> {
        self.client.send_json(endpoints::admin_classes()).await
    }

    async fn create_class(&self, request: CreateCarModelName) -> Result<ModelNameResponse> {
        self.client.send_json(endpoints::create_class(&request)?).await
    }

    /* ---------------------------------------------------------------------- */
    /* Contracts                                                               */
    /* ---------------------------------------------------------------------- */

    async fn contracts(
        &self,
        filters: &AdminContractFilters,
        page: &PageRequest,
    ) -> Result<Page<ContractResponse>> {
        self.page(endpoints::admin_contracts(filters, page)).await
    }

    async fn contract(&self, contract_id: i64) -> Result<ContractResponse> {
        self.client.send_json(endpoints::admin_contract(contract_id)).await
    }

    async fn confirm_contract(&self, contract_id: i64) -> Result<ContractResponse> {
        self.client.send_json(endpoints::confirm_contract(contract_id)).await
    }

    async fn cancel_contract(&self, contract_id: i64) -> Result<()> {
        self.client.send_unit(endpoints::admin_cancel_contract(contract_id)).await
    }

    async fn confirm_cancellation(&self, contract_id: i64) -> Result<()> {
        self.client.send_unit(endpoints::confirm_cancellation(contract_id)).await
    }

    /* ---------------------------------------------------------------------- */
    /* Users & documents                                                       */
    /* ---------------------------------------------------------------------- */

    async fn users(&self, filters: &UserFilters, page: &PageRequest) -> Result<Page<AllUserResponse>> {
        self.page(endpoints::users(filters, page)).await
    }

    async fn user(&self, user_id: i64) -> Result<AllUserResponse> {
        self.client.send_json(endpoints::user(user_id)).await
    }

    async fn update_user_role(&self, user_id: i64, role_name: &str) -> Result<()> {
        let request = RoleRequest { role_name: role_name.to_string() };
        self.client.send_unit(endpoints::update_user_role(user_id, &request)?).await?;
        info!(user_id, role = role_name, "user role updated");
        Ok(())
    }

    async fn ban_user(&self, user_id: i64) -> Result<()> {
        self.client.send_unit(endpoints::ban_user(user_id)).await
    }

    async fn unban_user(&self, user_id: i64) -> Result<()> {
        self.client.send_unit(endpoints::unban_user(user_id)).await
    }

    async fn documents(
        &self,
        only_unverified: bool,
        page: &PageRequest,
    ) -> Result<Page<DocumentResponse>> {
        self.page(endpoints::documents(only_unverified, page)).await
    }

    async fn verify_document(&self, document_id: i64) -> Result<()> {
        self.client.send_unit(endpoints::verify_document(document_id)).await
    }
}
