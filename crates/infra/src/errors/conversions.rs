//! Conversions from external infrastructure errors into domain errors.

use std::io::{Error as IoError, ErrorKind};

use carcatalogue_domain::CatalogueError;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct InfraError(pub CatalogueError);

impl From<InfraError> for CatalogueError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<CatalogueError> for InfraError {
    fn from(value: CatalogueError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoCatalogueError {
    fn into_catalogue(self) -> CatalogueError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → CatalogueError */
/* -------------------------------------------------------------------------- */

impl IntoCatalogueError for HttpError {
    fn into_catalogue(self) -> CatalogueError {
        if self.is_timeout() {
            return CatalogueError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return CatalogueError::Network("HTTP connection failure".into());
        }

        if self.is_decode() {
            return CatalogueError::Decode(self.to_string());
        }

        if self.is_builder() {
            return CatalogueError::Internal(format!("invalid HTTP request: {self}"));
        }

        CatalogueError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_catalogue())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → CatalogueError */
/* -------------------------------------------------------------------------- */

impl IntoCatalogueError for IoError {
    fn into_catalogue(self) -> CatalogueError {
        match self.kind() {
            ErrorKind::PermissionDenied => {
                CatalogueError::Storage(format!("permission denied: {self}"))
            }
            ErrorKind::NotFound => CatalogueError::Storage(format!("file not found: {self}")),
            _ => CatalogueError::Storage(self.to_string()),
        }
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError(value.into_catalogue())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → CatalogueError */
/* -------------------------------------------------------------------------- */

impl IntoCatalogueError for JsonError {
    fn into_catalogue(self) -> CatalogueError {
        if self.is_io() {
            return CatalogueError::Storage(self.to_string());
        }
        CatalogueError::Decode(format!("invalid JSON at line {}: {self}", self.line()))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_catalogue())
    }
}

/* -------------------------------------------------------------------------- */
/* url::ParseError → CatalogueError */
/* -------------------------------------------------------------------------- */

impl From<url::ParseError> for InfraError {
    fn from(value: url::ParseError) -> Self {
        InfraError(CatalogueError::Config(format!("invalid URL: {value}")))
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
