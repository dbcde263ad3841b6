//! Favorites screen

use std::sync::Arc;

use carcatalogue_core::{CarRepository, LoadOutcome, Paginator};
use carcatalogue_domain::CarListItemResponse;
use tracing::debug;

use super::state::{ListView, ScreenError, UiState};

pub struct FavoritesController {
    cars: Arc<dyn CarRepository>,
    paginator: Paginator<CarListItemResponse>,
}

impl FavoritesController {
    pub fn new(cars: Arc<dyn CarRepository>, page_size: u32) -> Self {
        Self { cars, paginator: Paginator::new(page_size) }
    }

    pub fn state(&self) -> UiState<ListView<CarListItemResponse>> {
        self.paginator.state().into()
    }

    pub async fn refresh(&self) -> LoadOutcome {
        self.load(true).await
    }

    pub async fn load_more(&self) -> LoadOutcome {
        self.load(false).await
    }

    /// Flip a favorite. A removed car disappears from the list at once; an
    /// added one shows up after a reload.
    ///
    /// # Errors
    /// A failed call is reported and the list is left as it was.
    pub async fn toggle(&self, car_id: i64, is_favorite: bool) -> Result<(), ScreenError> {
        if is_favorite {
            self.cars.remove_favorite(car_id).await?;
            self.paginator.retain(|car| car.id != car_id);
            debug!(car_id, "favorites.removed");
        } else {
            self.cars.add_favorite(car_id).await?;
            debug!(car_id, "favorites.added");
            self.refresh().await;
        }
        Ok(())
    }

    async fn load(&self, reset: bool) -> LoadOutcome {
        let cars = Arc::clone(&self.cars);
        self.paginator.load(reset, move |page| async move { cars.favorites(&page).await }).await
    }
}
