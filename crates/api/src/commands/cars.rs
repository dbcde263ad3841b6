use carcatalogue_domain::CatalogueFilters;
use chrono::NaiveDate;
use serde_json::{json, Value};

use super::{render, to_json};
use crate::screens::{ScreenError, UiState};
use crate::AppContext;

/// Filters and paging taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct CatalogueQuery {
    pub brands: Vec<String>,
    pub model: Option<String>,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub search: Option<String>,
    pub pages: u32,
}

impl CatalogueQuery {
    fn filters(&self) -> CatalogueFilters {
        CatalogueFilters {
            brands: self.brands.iter().cloned().collect(),
            model: self.model.clone(),
            min_year: self.min_year,
            max_year: self.max_year,
            min_price: self.min_price,
            max_price: self.max_price,
            ..CatalogueFilters::default()
        }
    }
}

pub async fn catalogue(context: &AppContext, query: CatalogueQuery) -> Result<Value, ScreenError> {
    let controller = context.catalogue_controller();
    controller.apply_filters(query.filters()).await;
    for _ in 1..query.pages {
        controller.load_more().await;
    }

    let state = match query.search.as_deref() {
        Some(search) => controller.search(search).await,
        None => controller.state(),
    };
    render(state)
}

pub async fn car(
    context: &AppContext,
    car_id: i64,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<Value, ScreenError> {
    let controller = context.car_detail_controller();
    let UiState::Success(car) = controller.load(car_id).await else {
        return render(controller.state());
    };
    controller.set_rental_dates(start, end);
    Ok(json!({
        "car": to_json(&car)?,
        "favorite": controller.is_favorite(),
        "total_cost": controller.total_cost(),
    }))
}

pub async fn favorites(context: &AppContext) -> Result<Value, ScreenError> {
    let controller = context.favorites_controller();
    controller.refresh().await;
    render(controller.state())
}

pub async fn toggle_favorite(
    context: &AppContext,
    car_id: i64,
    is_favorite: bool,
) -> Result<Value, ScreenError> {
    let controller = context.favorites_controller();
    controller.refresh().await;
    controller.toggle(car_id, is_favorite).await?;
    render(controller.state())
}
