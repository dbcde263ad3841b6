use std::time::Duration;

use carcatalogue_domain::CatalogueError;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::screens::ScreenError;

/// Install the global `fmt` subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. `json` switches
/// to one JSON object per line. Calling this twice is harmless; the second
/// call keeps the first subscriber.
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);
    let installed = if json { builder.json().try_init() } else { builder.try_init() };
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// Log the outcome of a CLI command with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"catalogue"`).
/// * `elapsed` - Duration the command execution took.
/// * `error` - Stable label of the failure, when the command failed.
///
/// Callers must avoid forwarding sensitive values in `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, error: Option<&'static str>) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    match error {
        None => info!(command, duration_ms, "command_execution_success"),
        Some(error_type) => {
            warn!(command, duration_ms, error_type, "command_execution_failure");
        }
    }
}

/// Convert a `CatalogueError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &CatalogueError) -> &'static str {
    match error {
        CatalogueError::Network(_) => "network",
        CatalogueError::Status { .. } => "status",
        CatalogueError::Unauthorized(_) => "unauthorized",
        CatalogueError::Decode(_) => "decode",
        CatalogueError::Validation(_) => "validation",
        CatalogueError::Storage(_) => "storage",
        CatalogueError::Config(_) => "config",
        CatalogueError::Internal(_) => "internal",
    }
}

/// Same as [`error_label`], for errors already mapped for a screen.
#[inline]
pub fn screen_error_label(error: &ScreenError) -> &'static str {
    match error {
        ScreenError::SessionExpired => "session_expired",
        ScreenError::Network(_) => "network",
        ScreenError::NotFound => "not_found",
        ScreenError::Server { .. } => "server",
        ScreenError::Validation(_) => "validation",
        ScreenError::Unexpected(_) => "unexpected",
    }
}
