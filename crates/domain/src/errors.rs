//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::ValidationError;

/// Main error type for the car catalogue client
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum CatalogueError {
    /// No response was obtained (connect failure, timeout, broken body).
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status other than 401.
    #[error("Server returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The server answered 401 after the session pipeline gave up.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Validation error: {0}")]
    Validation(ValidationError),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogueError {
    /// HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Unauthorized(_) => Some(401),
            _ => None,
        }
    }

    /// Whether the caller should send the user back to the login screen.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

impl From<ValidationError> for CatalogueError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

/// Result type alias for car catalogue operations
pub type Result<T> = std::result::Result<T, CatalogueError>;
