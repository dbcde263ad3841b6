//! # Car Catalogue App
//!
//! Application layer - headless screens, CLI commands and entry point.
//!
//! This crate contains:
//! - Screen controllers (state + operations, no rendering)
//! - CLI command handlers (terminal → controllers bridge)
//! - Application context (dependency injection)
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Provides the `carcatalogue` binary

pub mod commands;
pub mod context;
pub mod screens;
pub mod utils;

// Re-export for convenience
pub use commands::{execute, Command};
pub use context::*;
pub use screens::{ScreenError, UiState};
