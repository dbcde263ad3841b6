//! Explicit best-effort results
//!
//! Some follow-up work (caching the profile after login, loading filter
//! options) must not fail the operation that triggered it. Such work returns
//! a [`BestEffort`] so the caller either inspects the outcome or drops it in
//! plain sight.

use carcatalogue_domain::{CatalogueError, Result};
use tracing::warn;

/// Outcome of work whose failure is tolerated.
#[must_use = "inspect the outcome or call `.ignore()`"]
#[derive(Debug, Clone, PartialEq)]
pub enum BestEffort<T> {
    Done(T),
    Skipped(CatalogueError),
}

impl<T> BestEffort<T> {
    /// Wrap `result`, logging the failure under `operation`.
    pub fn from_result(operation: &'static str, result: Result<T>) -> Self {
        match result {
            Ok(value) => Self::Done(value),
            Err(err) => {
                warn!(operation, error = %err, "best_effort.skipped");
                Self::Skipped(err)
            }
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    pub fn ok(self) -> Option<T> {
        match self {
            Self::Done(value) => Some(value),
            Self::Skipped(_) => None,
        }
    }

    pub fn error(&self) -> Option<&CatalogueError> {
        match self {
            Self::Done(_) => None,
            Self::Skipped(err) => Some(err),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        self.ok().unwrap_or(default)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> BestEffort<U> {
        match self {
            Self::Done(value) => BestEffort::Done(f(value)),
            Self::Skipped(err) => BestEffort::Skipped(err),
        }
    }

    /// Drop the outcome deliberately.
    pub fn ignore(self) {}
}
