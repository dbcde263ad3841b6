//! # Car Catalogue Domain
//!
//! Domain types and wire contracts for the car catalogue client.
//!
//! This crate contains:
//! - Wire DTOs mirrored from the remote service (cars, contracts, users, ...)
//! - Session, cookie, pagination and filter types
//! - Domain error types and Result definitions
//! - Configuration structures and local input validation
//!
//! ## Architecture
//! - No dependencies on other car catalogue crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use validation::ValidationError;
