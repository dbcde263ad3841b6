//! Application context - dependency injection container

use std::sync::Arc;

use carcatalogue_core::{
    AdminRepository, AuthRepository, CarRepository, ContractRepository, CredentialStore,
    ProfileRepository,
};
use carcatalogue_domain::{Config, Result};
use carcatalogue_infra::{
    config, HttpAdminRepository, HttpAuthRepository, HttpCarRepository, HttpContractRepository,
    HttpProfileRepository, SessionContext,
};
use tracing::info;

use crate::screens::{
    AuthController, CarDetailController, CatalogueController, ContractsController,
    FavoritesController, ProfileController,
};

/// Type alias for auth repository port trait object
type DynAuthRepository = dyn AuthRepository + Send + Sync + 'static;

/// Type alias for car repository port trait object
type DynCarRepository = dyn CarRepository + Send + Sync + 'static;

/// Type alias for contract repository port trait object
type DynContractRepository = dyn ContractRepository + Send + Sync + 'static;

/// Type alias for profile repository port trait object
type DynProfileRepository = dyn ProfileRepository + Send + Sync + 'static;

/// Type alias for admin repository port trait object
type DynAdminRepository = dyn AdminRepository + Send + Sync + 'static;

/// Application context - holds the session and every repository
#[derive(Clone)]
pub struct AppContext {
    pub session: SessionContext,
    pub auth: Arc<DynAuthRepository>,
    pub cars: Arc<DynCarRepository>,
    pub contracts: Arc<DynContractRepository>,
    pub profile: Arc<DynProfileRepository>,
    pub admin: Arc<DynAdminRepository>,
}

impl AppContext {
    /// Load configuration from the environment (or a config file) and wire
    /// the HTTP repositories onto a file-backed session.
    ///
    /// # Errors
    /// Returns an error when the configuration is invalid or the HTTP client
    /// cannot be built.
    pub async fn new() -> Result<Self> {
        let config = config::load()?;
        Self::from_config(config).await
    }

    /// # Errors
    /// See [`AppContext::new`].
    pub async fn from_config(config: Config) -> Result<Self> {
        let session = SessionContext::from_config(config).await?;
        Ok(Self::from_session(session))
    }

    /// Wire the HTTP repositories onto an already built session.
    pub fn from_session(session: SessionContext) -> Self {
        info!(base_url = %session.config().api.base_url, "app context initialized");
        Self {
            auth: Arc::new(HttpAuthRepository::new(&session)),
            cars: Arc::new(HttpCarRepository::new(&session)),
            contracts: Arc::new(HttpContractRepository::new(&session)),
            profile: Arc::new(HttpProfileRepository::new(&session)),
            admin: Arc::new(HttpAdminRepository::new(&session)),
            session,
        }
    }

    pub fn credentials(&self) -> Arc<dyn CredentialStore> {
        Arc::clone(self.session.credentials())
    }

    pub fn page_size(&self) -> u32 {
        self.session.page_size()
    }

    /* ---------------------------------------------------------------------- */
    /* Screen controllers                                                     */
    /* ---------------------------------------------------------------------- */

    pub fn auth_controller(&self) -> AuthController {
        AuthController::new(self.auth.clone(), self.profile.clone(), self.credentials())
    }

    pub fn catalogue_controller(&self) -> CatalogueController {
        CatalogueController::new(self.cars.clone(), self.page_size())
    }

    pub fn favorites_controller(&self) -> FavoritesController {
        FavoritesController::new(self.cars.clone(), self.page_size())
    }

    pub fn car_detail_controller(&self) -> CarDetailController {
        CarDetailController::new(self.cars.clone())
    }

    pub fn contracts_controller(&self) -> ContractsController {
        ContractsController::new(self.contracts.clone(), self.page_size())
    }

    pub fn profile_controller(&self) -> ProfileController {
        ProfileController::new(self.profile.clone(), self.credentials())
    }
}
