//! Car detail screen: favorite flag, rental period and cost preview

use std::sync::Arc;

use carcatalogue_core::CarRepository;
use carcatalogue_domain::validation::validate_rental_period;
use carcatalogue_domain::{CarDetailResponse, CreateContractRequest, ValidationError};
use chrono::NaiveDate;
use parking_lot::Mutex;
use tracing::debug;

use super::state::{ScreenError, UiState};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Rental cost for a period, billed per started day.
///
/// The end date is exclusive and a same-day rental still costs one day.
/// Returns `None` when a date is missing or the period runs backwards.
#[allow(clippy::cast_precision_loss)]
pub fn rental_cost(start: Option<NaiveDate>, end: Option<NaiveDate>, daily_rate: f64) -> Option<f64> {
    let days = (end? - start?).num_days();
    if days < 0 {
        return None;
    }
    Some(days.max(1) as f64 * daily_rate)
}

#[derive(Debug)]
struct Detail {
    car: UiState<CarDetailResponse>,
    favorite: bool,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

pub struct CarDetailController {
    cars: Arc<dyn CarRepository>,
    detail: Mutex<Detail>,
}

impl CarDetailController {
    pub fn new(cars: Arc<dyn CarRepository>) -> Self {
        Self {
            cars,
            detail: Mutex::new(Detail {
                car: UiState::Loading,
                favorite: false,
                start: None,
                end: None,
            }),
        }
    }

    pub fn state(&self) -> UiState<CarDetailResponse> {
        self.detail.lock().car.clone()
    }

    pub fn is_favorite(&self) -> bool {
        self.detail.lock().favorite
    }

    pub fn rental_dates(&self) -> (Option<NaiveDate>, Option<NaiveDate>) {
        let detail = self.detail.lock();
        (detail.start, detail.end)
    }

    pub async fn load(&self, car_id: i64) -> UiState<CarDetailResponse> {
        self.detail.lock().car = UiState::Loading;
        let state: UiState<CarDetailResponse> = self.cars.car(car_id).await.into();

        let mut detail = self.detail.lock();
        if let UiState::Success(car) = &state {
            detail.favorite = car.favorite;
        }
        detail.car = state.clone();
        state
    }

    /// Flip the favorite flag of the loaded car and return the new value.
    ///
    /// # Errors
    /// Fails when no car is loaded or the server call fails; the flag is
    /// unchanged in both cases.
    pub async fn toggle_favorite(&self) -> Result<bool, ScreenError> {
        let (car_id, favorite) = {
            let detail = self.detail.lock();
            let car = detail.car.value().ok_or(ScreenError::NotFound)?;
            (car.id, detail.favorite)
        };

        if favorite {
            self.cars.remove_favorite(car_id).await?;
        } else {
            self.cars.add_favorite(car_id).await?;
        }

        let mut detail = self.detail.lock();
        detail.favorite = !favorite;
        if let UiState::Success(car) = &mut detail.car {
            car.favorite = !favorite;
        }
        debug!(car_id, favorite = !favorite, "car_detail.favorite_toggled");
        Ok(!favorite)
    }

    pub fn set_rental_dates(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) {
        let mut detail = self.detail.lock();
        detail.start = start;
        detail.end = end;
    }

    /// Cost preview for the chosen dates at the car's daily rate.
    pub fn total_cost(&self) -> Option<f64> {
        let detail = self.detail.lock();
        let rate = detail.car.value()?.rent;
        rental_cost(detail.start, detail.end, rate)
    }

    /// Contract request for the loaded car and the chosen dates.
    ///
    /// # Errors
    /// Fails when no car is loaded, a date is missing, or the end date is
    /// not after the start date.
    pub fn create_contract_request(&self) -> Result<CreateContractRequest, ScreenError> {
        let detail = self.detail.lock();
        let car = detail.car.value().ok_or(ScreenError::NotFound)?;
        let start = detail
            .start
            .ok_or_else(|| ValidationError::Required { field: "start date".into() })?;
        let end =
            detail.end.ok_or_else(|| ValidationError::Required { field: "end date".into() })?;
        validate_rental_period(start, end)?;

        Ok(CreateContractRequest {
            car_id: car.id,
            data_start: start.format(DATE_FORMAT).to_string(),
            data_end: end.format(DATE_FORMAT).to_string(),
            daily_rate: car.rent,
        })
    }
}
