use async_trait::async_trait;
use carcatalogue_core::ContractRepository;
use carcatalogue_domain::{
    ContractResponse, CreateContractRequest, Page, PageRequest, PagedModel, Result,
    UpdateContractRequest,
};
use tracing::info;

use crate::api::{endpoints, ApiClient};
use crate::session::SessionContext;

/// Rental contracts of the signed-in user.
pub struct HttpContractRepository {
    client: ApiClient,
}

impl HttpContractRepository {
    pub fn new(context: &SessionContext) -> Self {
        Self { client: context.client().clone() }
    }
}

#[async_trait]
impl ContractRepository for HttpContractRepository {
    async fn contracts(&self, page: &PageRequest) -> Result<Page<ContractResponse>> {
        let paged: PagedModel<ContractResponse> =
            self.client.send_json(endpoints::contracts(page)).await?;
        Ok(paged.into())
    }

    async fn contract(&self, contract_id: i64) -> Result<ContractResponse> {
        self.client.send_json(endpoints::contract(contract_id)).await
    }

    async fn create(&self, request: CreateContractRequest) -> Result<ContractResponse> {
        let contract: ContractResponse =
            self.client.send_json(endpoints::create_contract(&request)?).await?;
        info!(contract_id = contract.id, car_id = request.car_id, "contract created");
        Ok(contract)
    }

    async fn update(
        &self,
        contract_id: i64,
        request: UpdateContractRequest,
    ) -> Result<ContractResponse> {
        self.client.send_json(endpoints::update_contract(contract_id, &request)?).await
    }

    async fn cancel(&self, contract_id: i64) -> Result<()> {
        self.client.send_unit(endpoints::cancel_contract(contract_id)).await?;
        info!(contract_id, "contract cancellation requested");
        Ok(())
    }
}
