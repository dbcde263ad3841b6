//! In-memory repository doubles for controller tests

use std::collections::BTreeSet;

use async_trait::async_trait;
use carcatalogue_core::{AuthRepository, CarRepository, ContractRepository, ProfileRepository};
use carcatalogue_domain::{
    AuthRequest, CarDetailResponse, CarListItemResponse, CatalogueError, CatalogueFilters,
    ChangePasswordRequest, ContractResponse, ContractState, CreateContractRequest,
    CreateDocumentRequest, DocumentResponse, MinMaxCellForFilters, Page, PageRequest,
    RegistrationRequest, Result, UpdateContractRequest, UpdateDocumentRequest,
    UpdateProfileRequest, UserResponse,
};
use parking_lot::Mutex;

pub fn network_error() -> CatalogueError {
    CatalogueError::Network("connection refused".into())
}

pub fn not_found() -> CatalogueError {
    CatalogueError::Status { status: 404, body: String::new() }
}

pub fn car_item(id: i64, brand: &str, model: &str) -> CarListItemResponse {
    CarListItemResponse {
        id,
        brand: brand.into(),
        car_class: "Comfort".into(),
        model: model.into(),
        year_of_issue: 2021,
        rent: 3000.0,
        status: "AVAILABLE".into(),
        favorite: false,
        image_url: None,
    }
}

pub fn car_detail(id: i64, rent: f64) -> CarDetailResponse {
    CarDetailResponse {
        id,
        model_id: 3,
        brand: "Toyota".into(),
        model: "Camry".into(),
        body_type: "Sedan".into(),
        car_class: "Comfort".into(),
        year_of_issue: 2021,
        gos_number: "A123BC77".into(),
        vin: "JTNB11HK103456789".into(),
        status: "AVAILABLE".into(),
        rent,
        favorite: false,
        image_url: None,
    }
}

pub fn contract(id: i64) -> ContractResponse {
    ContractResponse {
        id,
        total_cost: 9000.0,
        brand: "Toyota".into(),
        model: "Camry".into(),
        body_type: "Sedan".into(),
        car_class: "Comfort".into(),
        year_of_issue: 2021,
        last_name: "Ivanov".into(),
        start_date: "2024-05-01".into(),
        end_date: "2024-05-04".into(),
        vin: "JTNB11HK103456789".into(),
        gos_number: "A123BC77".into(),
        state: Some(ContractState::Pending),
    }
}

pub fn user() -> UserResponse {
    UserResponse {
        id: 42,
        first_name: Some("Ivan".into()),
        last_name: "Ivanov".into(),
        login: "driver01".into(),
        phone: None,
        email: "driver@example.com".into(),
        email_verified: true,
    }
}

pub fn document() -> DocumentResponse {
    DocumentResponse {
        id: 5,
        document_type: "PASSPORT".into(),
        series: "4510".into(),
        number: "123456".into(),
        date_of_issue: "2015-03-01".into(),
        issuing_authority: "Moscow".into(),
        verified: false,
    }
}

/// Slice `all` the way the server pages a list.
pub fn page_of<T: Clone>(all: &[T], request: &PageRequest) -> Page<T> {
    let size = request.size as usize;
    let items: Vec<T> = all.iter().skip(request.page as usize * size).take(size).cloned().collect();
    let total = all.len() as u64;
    Page {
        items,
        page_index: u64::from(request.page),
        page_size: u64::from(request.size),
        total_items: total,
        total_pages: total.div_ceil(u64::from(request.size)),
    }
}

/* -------------------------------------------------------------------------- */
/* Cars                                                                       */
/* -------------------------------------------------------------------------- */

#[derive(Default)]
pub struct MockCarRepository {
    pub cars: Mutex<Vec<CarListItemResponse>>,
    pub favorites: Mutex<BTreeSet<i64>>,
    pub catalogue_requests: Mutex<Vec<(CatalogueFilters, PageRequest)>>,
    pub calls: Mutex<Vec<String>>,
    pub fail_options: bool,
    pub fail_catalogue: Mutex<bool>,
}

impl MockCarRepository {
    pub fn with_cars(cars: Vec<CarListItemResponse>) -> Self {
        Self { cars: Mutex::new(cars), ..Self::default() }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().push(call.into());
    }

    fn options(&self, name: &str, values: &[&str]) -> Result<Vec<String>> {
        self.record(name);
        if self.fail_options {
            return Err(network_error());
        }
        Ok(values.iter().map(ToString::to_string).collect())
    }

    fn with_favorite_flags(&self, mut car: CarListItemResponse) -> CarListItemResponse {
        car.favorite = self.favorites.lock().contains(&car.id);
        car
    }
}

#[async_trait]
impl CarRepository for MockCarRepository {
    async fn catalogue(
        &self,
        filters: &CatalogueFilters,
        page: &PageRequest,
    ) -> Result<Page<CarListItemResponse>> {
        self.record(format!("catalogue:{}", page.page));
        self.catalogue_requests.lock().push((filters.clone(), page.clone()));
        if *self.fail_catalogue.lock() {
            return Err(network_error());
        }
        let cars: Vec<_> =
            self.cars.lock().iter().cloned().map(|car| self.with_favorite_flags(car)).collect();
        Ok(page_of(&cars, page))
    }

    async fn car(&self, car_id: i64) -> Result<CarDetailResponse> {
        self.record(format!("car:{car_id}"));
        let known = self.cars.lock().iter().find(|car| car.id == car_id).cloned();
        let car = known.ok_or_else(not_found)?;
        let mut detail = car_detail(car.id, car.rent);
        detail.favorite = self.favorites.lock().contains(&car_id);
        Ok(detail)
    }

    async fn brands(&self) -> Result<Vec<String>> {
        self.options("brands", &["BMW", "Toyota"])
    }

    async fn models(&self) -> Result<Vec<String>> {
        self.options("models", &["Camry", "X5"])
    }

    async fn body_types(&self) -> Result<Vec<String>> {
        self.options("body_types", &["Sedan"])
    }

    async fn classes(&self) -> Result<Vec<String>> {
        self.options("classes", &["Comfort"])
    }

    async fn price_bounds(&self, _filters: &CatalogueFilters) -> Result<MinMaxCellForFilters> {
        self.record("price_bounds");
        if self.fail_options {
            return Err(network_error());
        }
        Ok(MinMaxCellForFilters { min: 1500.0, max: 9000.0 })
    }

    async fn favorites(&self, page: &PageRequest) -> Result<Page<CarListItemResponse>> {
        self.record(format!("favorites:{}", page.page));
        let favorites = self.favorites.lock().clone();
        let cars: Vec<_> = self
            .cars
            .lock()
            .iter()
            .filter(|car| favorites.contains(&car.id))
            .cloned()
            .map(|car| self.with_favorite_flags(car))
            .collect();
        Ok(page_of(&cars, page))
    }

    async fn favorite(&self, car_id: i64) -> Result<CarListItemResponse> {
        self.record(format!("favorite:{car_id}"));
        if !self.favorites.lock().contains(&car_id) {
            return Err(not_found());
        }
        let car = self.cars.lock().iter().find(|car| car.id == car_id).cloned();
        car.map(|car| self.with_favorite_flags(car)).ok_or_else(not_found)
    }

    async fn add_favorite(&self, car_id: i64) -> Result<CarListItemResponse> {
        self.record(format!("add_favorite:{car_id}"));
        self.favorites.lock().insert(car_id);
        let car = self.cars.lock().iter().find(|car| car.id == car_id).cloned();
        car.map(|car| self.with_favorite_flags(car)).ok_or_else(not_found)
    }

    async fn remove_favorite(&self, car_id: i64) -> Result<()> {
        self.record(format!("remove_favorite:{car_id}"));
        self.favorites.lock().remove(&car_id);
        Ok(())
    }
}

/* -------------------------------------------------------------------------- */
/* Auth                                                                       */
/* -------------------------------------------------------------------------- */

#[derive(Default)]
pub struct MockAuthRepository {
    pub logins: Mutex<Vec<AuthRequest>>,
    pub registrations: Mutex<Vec<RegistrationRequest>>,
    pub logouts: Mutex<usize>,
    pub login_error: Mutex<Option<CatalogueError>>,
    pub logout_error: Mutex<Option<CatalogueError>>,
}

#[async_trait]
impl AuthRepository for MockAuthRepository {
    async fn login(&self, request: AuthRequest) -> Result<()> {
        self.logins.lock().push(request);
        match self.login_error.lock().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn register(&self, request: RegistrationRequest) -> Result<UserResponse> {
        let mut registered = user();
        registered.login.clone_from(&request.login);
        registered.last_name.clone_from(&request.last_name);
        registered.email.clone_from(&request.email);
        self.registrations.lock().push(request);
        Ok(registered)
    }

    async fn logout(&self) -> Result<()> {
        *self.logouts.lock() += 1;
        match self.logout_error.lock().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn request_password_reset(&self, _email: &str) -> Result<()> {
        Ok(())
    }

    async fn reset_password(&self, _code: &str, _request: RegistrationRequest) -> Result<()> {
        Ok(())
    }

    async fn request_email_verification(&self) -> Result<()> {
        Ok(())
    }

    async fn confirm_email(&self, _code: &str) -> Result<()> {
        Ok(())
    }
}

/* -------------------------------------------------------------------------- */
/* Profile                                                                    */
/* -------------------------------------------------------------------------- */

pub struct MockProfileRepository {
    pub profile: Mutex<Result<UserResponse>>,
    pub document: Mutex<Option<DocumentResponse>>,
    pub profile_updates: Mutex<Vec<UpdateProfileRequest>>,
    pub password_changes: Mutex<Vec<ChangePasswordRequest>>,
    pub document_creates: Mutex<Vec<CreateDocumentRequest>>,
    pub document_updates: Mutex<Vec<UpdateDocumentRequest>>,
}

impl Default for MockProfileRepository {
    fn default() -> Self {
        Self {
            profile: Mutex::new(Ok(user())),
            document: Mutex::new(None),
            profile_updates: Mutex::new(Vec::new()),
            password_changes: Mutex::new(Vec::new()),
            document_creates: Mutex::new(Vec::new()),
            document_updates: Mutex::new(Vec::new()),
        }
    }
}

impl MockProfileRepository {
    pub fn failing(err: CatalogueError) -> Self {
        Self { profile: Mutex::new(Err(err)), ..Self::default() }
    }
}

#[async_trait]
impl ProfileRepository for MockProfileRepository {
    async fn profile(&self) -> Result<UserResponse> {
        self.profile.lock().clone()
    }

    async fn me(&self) -> Result<()> {
        self.profile.lock().clone().map(|_| ())
    }

    async fn update_profile(&self, request: UpdateProfileRequest) -> Result<()> {
        self.profile_updates.lock().push(request);
        Ok(())
    }

    async fn delete_profile(&self) -> Result<()> {
        Ok(())
    }

    async fn change_password(&self, request: ChangePasswordRequest) -> Result<()> {
        self.password_changes.lock().push(request);
        Ok(())
    }

    async fn document(&self) -> Result<DocumentResponse> {
        self.document.lock().clone().ok_or_else(not_found)
    }

    async fn create_document(&self, request: CreateDocumentRequest) -> Result<DocumentResponse> {
        let mut created = document();
        created.series.clone_from(&request.series);
        created.number.clone_from(&request.number);
        self.document_creates.lock().push(request);
        *self.document.lock() = Some(created.clone());
        Ok(created)
    }

    async fn update_document(&self, request: UpdateDocumentRequest) -> Result<DocumentResponse> {
        let mut current = self.document.lock().clone().ok_or_else(not_found)?;
        if let Some(series) = &request.series {
            current.series.clone_from(series);
        }
        if let Some(number) = &request.number {
            current.number.clone_from(number);
        }
        self.document_updates.lock().push(request);
        *self.document.lock() = Some(current.clone());
        Ok(current)
    }

    async fn delete_document(&self) -> Result<()> {
        self.document.lock().take().map(|_| ()).ok_or_else(not_found)
    }
}

/* -------------------------------------------------------------------------- */
/* Contracts                                                                  */
/* -------------------------------------------------------------------------- */

#[derive(Default)]
pub struct MockContractRepository {
    pub contracts: Mutex<Vec<ContractResponse>>,
    pub created: Mutex<Vec<CreateContractRequest>>,
    pub cancelled: Mutex<Vec<i64>>,
    pub list_requests: Mutex<usize>,
}

#[async_trait]
impl ContractRepository for MockContractRepository {
    async fn contracts(&self, page: &PageRequest) -> Result<Page<ContractResponse>> {
        *self.list_requests.lock() += 1;
        Ok(page_of(&self.contracts.lock(), page))
    }

    async fn contract(&self, contract_id: i64) -> Result<ContractResponse> {
        self.contracts.lock().iter().find(|c| c.id == contract_id).cloned().ok_or_else(not_found)
    }

    async fn create(&self, request: CreateContractRequest) -> Result<ContractResponse> {
        let mut contracts = self.contracts.lock();
        let created = contract(contracts.len() as i64 + 1);
        contracts.push(created.clone());
        self.created.lock().push(request);
        Ok(created)
    }

    async fn update(
        &self,
        contract_id: i64,
        _request: UpdateContractRequest,
    ) -> Result<ContractResponse> {
        self.contract(contract_id).await
    }

    async fn cancel(&self, contract_id: i64) -> Result<()> {
        self.cancelled.lock().push(contract_id);
        let mut contracts = self.contracts.lock();
        let found = contracts.iter_mut().find(|c| c.id == contract_id).ok_or_else(not_found)?;
        found.state = Some(ContractState::CancellationRequested);
        Ok(())
    }
}
