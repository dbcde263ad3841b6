//! Headless screen controllers
//!
//! Each controller owns the state of one screen and drives the repository
//! ports. Nothing here renders; a front end reads `state()` and calls the
//! operations.

pub mod auth;
pub mod car_detail;
pub mod catalogue;
pub mod contracts;
pub mod favorites;
pub mod profile;
pub mod state;

#[cfg(test)]
pub(crate) mod mocks;

pub use auth::AuthController;
pub use car_detail::{rental_cost, CarDetailController};
pub use catalogue::{CatalogueController, FilterOptions};
pub use contracts::ContractsController;
pub use favorites::FavoritesController;
pub use profile::{ProfileController, ProfileView};
pub use state::{ListView, ScreenError, UiState};
