//! Catalogue screen: filtered, paginated car list with local search

use std::sync::Arc;

use carcatalogue_core::{BestEffort, CarRepository, LoadOutcome, PageState, Paginator};
use carcatalogue_domain::constants::{DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE};
use carcatalogue_domain::{CarListItemResponse, CatalogueFilters};
use parking_lot::Mutex;
use serde::Serialize;
use tracing::debug;

use super::state::{ListView, ScreenError, UiState};

/// Choices offered by the filter sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOptions {
    pub brands: Vec<String>,
    pub models: Vec<String>,
    pub body_types: Vec<String>,
    pub classes: Vec<String>,
    pub min_price: f64,
    pub max_price: f64,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            brands: Vec::new(),
            models: Vec::new(),
            body_types: Vec::new(),
            classes: Vec::new(),
            min_price: DEFAULT_MIN_PRICE,
            max_price: DEFAULT_MAX_PRICE,
        }
    }
}

pub struct CatalogueController {
    cars: Arc<dyn CarRepository>,
    filters: Mutex<CatalogueFilters>,
    options: Mutex<FilterOptions>,
    paginator: Paginator<CarListItemResponse>,
}

impl CatalogueController {
    pub fn new(cars: Arc<dyn CarRepository>, page_size: u32) -> Self {
        Self {
            cars,
            filters: Mutex::new(CatalogueFilters::default()),
            options: Mutex::new(FilterOptions::default()),
            paginator: Paginator::new(page_size),
        }
    }

    pub fn filters(&self) -> CatalogueFilters {
        self.filters.lock().clone()
    }

    pub fn options(&self) -> FilterOptions {
        self.options.lock().clone()
    }

    /// Number of filter groups in use, for the filter badge.
    pub fn active_filter_count(&self) -> usize {
        self.filters.lock().active_count()
    }

    pub fn is_loading(&self) -> bool {
        self.paginator.is_loading()
    }

    /// The list as shown, narrowed by the local search query when one is set.
    pub fn state(&self) -> UiState<ListView<CarListItemResponse>> {
        let query = self.filters.lock().search_query.clone();
        match (self.paginator.state(), query) {
            (PageState::Loaded { items, has_more }, Some(query)) => {
                let needle = query.to_lowercase();
                let matches: Vec<_> =
                    items.into_iter().filter(|car| matches_search(car, &needle)).collect();
                if matches.is_empty() {
                    UiState::Empty
                } else {
                    UiState::Success(ListView { items: matches, has_more })
                }
            }
            (state, _) => state.into(),
        }
    }

    /// Load every filter option. Each list falls back to its default on
    /// failure; the price range falls back to the catalogue-wide bounds.
    pub async fn load_options(&self) -> FilterOptions {
        let filters = self.filters();
        let (brands, models, body_types, classes, bounds) = tokio::join!(
            self.cars.brands(),
            self.cars.models(),
            self.cars.body_types(),
            self.cars.classes(),
            self.cars.price_bounds(&filters),
        );

        let (min_price, max_price) = BestEffort::from_result("load_price_bounds", bounds)
            .map(|bounds| (bounds.min, bounds.max))
            .unwrap_or((DEFAULT_MIN_PRICE, DEFAULT_MAX_PRICE));
        let options = FilterOptions {
            brands: BestEffort::from_result("load_brands", brands).unwrap_or(Vec::new()),
            models: BestEffort::from_result("load_models", models).unwrap_or(Vec::new()),
            body_types: BestEffort::from_result("load_body_types", body_types)
                .unwrap_or(Vec::new()),
            classes: BestEffort::from_result("load_classes", classes).unwrap_or(Vec::new()),
            min_price,
            max_price,
        };
        self.options.lock().clone_from(&options);
        options
    }

    /// Drop the loaded pages and fetch the first one again.
    pub async fn refresh(&self) -> LoadOutcome {
        self.load(true).await
    }

    /// Fetch the next page, unless one is loading or the last is loaded.
    pub async fn load_more(&self) -> LoadOutcome {
        self.load(false).await
    }

    /// Replace the filters and reload from the first page. An active search
    /// query is kept.
    pub async fn apply_filters(&self, filters: CatalogueFilters) -> LoadOutcome {
        {
            let mut current = self.filters.lock();
            let search_query = current.search_query.take();
            *current = filters.with_search(search_query);
        }
        debug!(active = self.active_filter_count(), "catalogue.filters_applied");
        self.refresh().await
    }

    pub async fn reset_filters(&self) -> LoadOutcome {
        *self.filters.lock() = CatalogueFilters::default();
        self.refresh().await
    }

    /// Narrow the loaded cars by brand or model. A blank query clears the
    /// search and reloads the list.
    pub async fn search(&self, query: &str) -> UiState<ListView<CarListItemResponse>> {
        let query = query.trim();
        if query.is_empty() {
            self.filters.lock().search_query = None;
            self.refresh().await;
        } else {
            self.filters.lock().search_query = Some(query.to_string());
        }
        self.state()
    }

    /// Flip the favorite flag of a car and reload the list.
    ///
    /// # Errors
    /// A failed add or remove is reported and the list is left as it was.
    pub async fn toggle_favorite(
        &self,
        car_id: i64,
        is_favorite: bool,
    ) -> Result<LoadOutcome, ScreenError> {
        if is_favorite {
            self.cars.remove_favorite(car_id).await?;
        } else {
            self.cars.add_favorite(car_id).await?;
        }
        debug!(car_id, favorite = !is_favorite, "catalogue.favorite_toggled");
        Ok(self.refresh().await)
    }

    async fn load(&self, reset: bool) -> LoadOutcome {
        let cars = Arc::clone(&self.cars);
        let filters = self.filters();
        self.paginator
            .load(reset, move |page| async move { cars.catalogue(&filters, &page).await })
            .await
    }
}

fn matches_search(car: &CarListItemResponse, needle: &str) -> bool {
    car.brand.to_lowercase().contains(needle) || car.model.to_lowercase().contains(needle)
}
