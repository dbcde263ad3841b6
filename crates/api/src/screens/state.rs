//! Screen state shared by every controller

use carcatalogue_core::PageState;
use carcatalogue_domain::{CatalogueError, ValidationError};
use serde::Serialize;
use thiserror::Error;

/// What a screen shows right now.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum UiState<T> {
    Loading,
    Success(T),
    Empty,
    Error(ScreenError),
}

impl<T> UiState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ScreenError> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Whether the screen should hand control back to the login screen.
    pub fn requires_login(&self) -> bool {
        matches!(self, Self::Error(ScreenError::SessionExpired))
    }
}

impl<T> From<std::result::Result<T, CatalogueError>> for UiState<T> {
    fn from(result: std::result::Result<T, CatalogueError>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(err) => Self::Error(err.into()),
        }
    }
}

/// Paginated list as a screen sees it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListView<T> {
    pub items: Vec<T>,
    pub has_more: bool,
}

impl<T> From<PageState<T>> for UiState<ListView<T>> {
    fn from(state: PageState<T>) -> Self {
        match state {
            // An idle list has not been asked for anything yet.
            PageState::Idle | PageState::Loading => Self::Loading,
            PageState::Loaded { items, has_more } => Self::Success(ListView { items, has_more }),
            PageState::Empty => Self::Empty,
            PageState::Failed(err) => Self::Error(err.into()),
        }
    }
}

/// User-facing error categories.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum ScreenError {
    /// The session is gone; the user has to sign in again.
    #[error("session expired, please sign in again")]
    SessionExpired,

    #[error("no connection to the server: {0}")]
    Network(String),

    #[error("not found")]
    NotFound,

    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },

    #[error("{0}")]
    Validation(ValidationError),

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl From<CatalogueError> for ScreenError {
    fn from(err: CatalogueError) -> Self {
        match err {
            CatalogueError::Unauthorized(_) => Self::SessionExpired,
            CatalogueError::Network(message) => Self::Network(message),
            CatalogueError::Status { status: 404, .. } => Self::NotFound,
            CatalogueError::Status { status, body } => Self::Server { status, message: body },
            CatalogueError::Validation(err) => Self::Validation(err),
            other => Self::Unexpected(other.to_string()),
        }
    }
}

impl From<ValidationError> for ScreenError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}
