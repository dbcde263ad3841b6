//! Rental contracts screen

use std::sync::Arc;

use carcatalogue_core::{ContractRepository, LoadOutcome, Paginator};
use carcatalogue_domain::{ContractResponse, CreateContractRequest};
use tracing::info;

use super::state::{ListView, ScreenError, UiState};

pub struct ContractsController {
    contracts: Arc<dyn ContractRepository>,
    paginator: Paginator<ContractResponse>,
}

impl ContractsController {
    pub fn new(contracts: Arc<dyn ContractRepository>, page_size: u32) -> Self {
        Self { contracts, paginator: Paginator::new(page_size) }
    }

    pub fn state(&self) -> UiState<ListView<ContractResponse>> {
        self.paginator.state().into()
    }

    pub async fn refresh(&self) -> LoadOutcome {
        self.load(true).await
    }

    pub async fn load_more(&self) -> LoadOutcome {
        self.load(false).await
    }

    pub async fn contract(&self, contract_id: i64) -> UiState<ContractResponse> {
        self.contracts.contract(contract_id).await.into()
    }

    /// Submit a rental. Price and state come back from the server as-is.
    ///
    /// # Errors
    /// Returns the server's rejection unchanged.
    pub async fn create(
        &self,
        request: CreateContractRequest,
    ) -> Result<ContractResponse, ScreenError> {
        let car_id = request.car_id;
        let contract = self.contracts.create(request).await?;
        info!(contract_id = contract.id, car_id, "contracts.created");
        self.refresh().await;
        Ok(contract)
    }

    /// Ask for a cancellation and reload the list to show the new state.
    ///
    /// # Errors
    /// Returns the server's rejection unchanged.
    pub async fn cancel(&self, contract_id: i64) -> Result<(), ScreenError> {
        self.contracts.cancel(contract_id).await?;
        info!(contract_id, "contracts.cancel_requested");
        self.refresh().await;
        Ok(())
    }

    async fn load(&self, reset: bool) -> LoadOutcome {
        let contracts = Arc::clone(&self.contracts);
        self.paginator
            .load(reset, move |page| async move { contracts.contracts(&page).await })
            .await
    }
}
