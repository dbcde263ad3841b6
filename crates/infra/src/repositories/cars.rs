//! Catalogue and favorites repository

use async_trait::async_trait;
use carcatalogue_core::CarRepository;
use carcatalogue_domain::{
    CarDetailResponse, CarListItemResponse, CatalogueFilters, MinMaxCellForFilters, Page,
    PageRequest, PagedModel, Result,
};
use tracing::debug;

use crate::api::{endpoints, ApiClient};
use crate::session::SessionContext;

pub struct HttpCarRepository {
    client: ApiClient,
}

impl HttpCarRepository {
    pub fn new(context: &SessionContext) -> Self {
        Self { client: context.client().clone() }
    }
}

#[async_trait]
impl CarRepository for HttpCarRepository {
    async fn catalogue(
        &self,
        filters: &CatalogueFilters,
        page: &PageRequest,
    ) -> Result<Page<CarListItemResponse>> {
        let paged: PagedModel<CarListItemResponse> =
            self.client.send_json(endpoints::catalogue(filters, page)).await?;
        let page = Page::from(paged);
        debug!(
            page = page.page_index,
            items = page.items.len(),
            total = page.total_items,
            "catalogue page loaded"
        );
        Ok(page)
    }

    async fn car(&self, car_id: i64) -> Result<CarDetailResponse> {
        self.client.send_json(endpoints::car(car_id)).await
    }

    async fn brands(&self) -> Result<Vec<String>> {
        self.client.send_json(endpoints::filter_brands()).await
    }

    async fn models(&self) -> Result<Vec<String>> {
        self.client.send_json(endpoints::filter_models()).await
    }

    async fn body_types(&self) -> Result<Vec<String>> {
        self.client.send_json(endpoints::filter_body_types()).await
    }

    async fn classes(&self) -> Result<Vec<String>> {
        self.client.send_json(endpoints::filter_classes()).await
    }

    async fn price_bounds(&self, filters: &CatalogueFilters) -> Result<MinMaxCellForFilters> {
        self.client.send_json(endpoints::price_bounds(filters)).await
    }

    async fn favorites(&self, page: &PageRequest) -> Result<Page<CarListItemResponse>> {
        let paged: PagedModel<CarListItemResponse> =
            self.client.send_json(endpoints::favorites(page)).await?;
        Ok(paged.into())
    }

    async fn favorite(&self, car_id: i64) -> Result<CarListItemResponse> {
        self.client.send_json(endpoints::favorite(car_id)).await
    }

    async fn add_favorite(&self, car_id: i64) -> Result<CarListItemResponse> {
        self.client.send_json(endpoints::add_favorite(car_id)).await
    }

    async fn remove_favorite(&self, car_id: i64) -> Result<()> {
        self.client.send_unit(endpoints::remove_favorite(car_id)).await
    }
}
