//! Port interfaces for the car catalogue and favorites

use async_trait::async_trait;
use carcatalogue_domain::{
    CarDetailResponse, CarListItemResponse, CatalogueFilters, MinMaxCellForFilters, Page,
    PageRequest, Result,
};

#[async_trait]
pub trait CarRepository: Send + Sync {
    /// One catalogue page for the given filters.
    async fn catalogue(
        &self,
        filters: &CatalogueFilters,
        page: &PageRequest,
    ) -> Result<Page<CarListItemResponse>>;

    async fn car(&self, car_id: i64) -> Result<CarDetailResponse>;

    async fn brands(&self) -> Result<Vec<String>>;

    async fn models(&self) -> Result<Vec<String>>;

    async fn body_types(&self) -> Result<Vec<String>>;

    async fn classes(&self) -> Result<Vec<String>>;

    /// Lowest and highest daily rate among cars matching `filters`. The
    /// price range inside `filters` is ignored.
    async fn price_bounds(&self, filters: &CatalogueFilters) -> Result<MinMaxCellForFilters>;

    async fn favorites(&self, page: &PageRequest) -> Result<Page<CarListItemResponse>>;

    /// The favorite entry for `car_id`; a 404 status means "not a favorite".
    async fn favorite(&self, car_id: i64) -> Result<CarListItemResponse>;

    async fn add_favorite(&self, car_id: i64) -> Result<CarListItemResponse>;

    async fn remove_favorite(&self, car_id: i64) -> Result<()>;
}
