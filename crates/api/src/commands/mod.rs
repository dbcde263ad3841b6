//! CLI command handlers
//!
//! Each handler drives one controller and returns the resulting screen state
//! as JSON. Printing is left to the binary.

pub mod auth;
pub mod cars;
pub mod contracts;
pub mod profile;

use std::time::Instant;

use chrono::NaiveDate;
use clap::Subcommand;
use serde::Serialize;
use serde_json::Value;

use crate::screens::{ScreenError, UiState};
use crate::utils::logging::{log_command_execution, screen_error_label};
use crate::AppContext;

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Sign in and cache the account identity
    Login {
        username: String,
        #[arg(long, env = "CARCATALOGUE_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Sign out and forget the stored session
    Logout,
    /// Browse the catalogue
    Catalogue {
        #[arg(long = "brand")]
        brands: Vec<String>,
        #[arg(long)]
        model: Option<String>,
        #[arg(long)]
        min_year: Option<i32>,
        #[arg(long)]
        max_year: Option<i32>,
        #[arg(long)]
        min_price: Option<f64>,
        #[arg(long)]
        max_price: Option<f64>,
        /// Narrow the loaded cars by brand or model
        #[arg(long)]
        search: Option<String>,
        /// Number of pages to load
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },
    /// Show one car, with a cost preview when both dates are given
    Car {
        id: i64,
        #[arg(long)]
        start: Option<NaiveDate>,
        #[arg(long)]
        end: Option<NaiveDate>,
    },
    /// List favorite cars
    Favorites,
    /// Add a car to the favorites
    FavoriteAdd { id: i64 },
    /// Remove a car from the favorites
    FavoriteRemove { id: i64 },
    /// List rental contracts
    Contracts,
    /// Show the profile, or the cached identity when offline
    Profile,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Login { .. } => "login",
            Self::Logout => "logout",
            Self::Catalogue { .. } => "catalogue",
            Self::Car { .. } => "car",
            Self::Favorites => "favorites",
            Self::FavoriteAdd { .. } => "favorite-add",
            Self::FavoriteRemove { .. } => "favorite-remove",
            Self::Contracts => "contracts",
            Self::Profile => "profile",
        }
    }
}

/// Run `command` against `context` and log how it went.
///
/// # Errors
/// Returns the screen error the command ended in.
pub async fn execute(context: &AppContext, command: Command) -> Result<Value, ScreenError> {
    let name = command.name();
    let started = Instant::now();

    let result = match command {
        Command::Login { username, password } => auth::login(context, &username, &password).await,
        Command::Logout => auth::logout(context).await,
        Command::Catalogue {
            brands,
            model,
            min_year,
            max_year,
            min_price,
            max_price,
            search,
            pages,
        } => {
            let query = cars::CatalogueQuery {
                brands,
                model,
                min_year,
                max_year,
                min_price,
                max_price,
                search,
                pages,
            };
            cars::catalogue(context, query).await
        }
        Command::Car { id, start, end } => cars::car(context, id, start, end).await,
        Command::Favorites => cars::favorites(context).await,
        Command::FavoriteAdd { id } => cars::toggle_favorite(context, id, false).await,
        Command::FavoriteRemove { id } => cars::toggle_favorite(context, id, true).await,
        Command::Contracts => contracts::list(context).await,
        Command::Profile => profile::show(context).await,
    };

    log_command_execution(name, started.elapsed(), result.as_ref().err().map(screen_error_label));
    result
}

/// Turn a screen state into command output. An error state becomes `Err`.
pub(crate) fn render<T: Serialize>(state: UiState<T>) -> Result<Value, ScreenError> {
    if let UiState::Error(err) = state {
        return Err(err);
    }
    to_json(&state)
}

pub(crate) fn to_json<T: Serialize>(value: &T) -> Result<Value, ScreenError> {
    serde_json::to_value(value).map_err(|err| ScreenError::Unexpected(err.to_string()))
}
