//! Port interface for the signed-in user's rental contracts

use async_trait::async_trait;
use carcatalogue_domain::{
    ContractResponse, CreateContractRequest, Page, PageRequest, Result, UpdateContractRequest,
};

#[async_trait]
pub trait ContractRepository: Send + Sync {
    async fn contracts(&self, page: &PageRequest) -> Result<Page<ContractResponse>>;

    async fn contract(&self, contract_id: i64) -> Result<ContractResponse>;

    async fn create(&self, request: CreateContractRequest) -> Result<ContractResponse>;

    async fn update(
        &self,
        contract_id: i64,
        request: UpdateContractRequest,
    ) -> Result<ContractResponse>;

    /// Request cancellation. The server decides the resulting state.
    async fn cancel(&self, contract_id: i64) -> Result<()>;
}
