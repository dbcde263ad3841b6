//! # Car Catalogue Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The reqwest transport and the session cookie store
//! - Credential stores (file-backed and in-memory)
//! - The authenticated-fetch pipeline and the typed endpoint catalog
//! - Repository implementations and the configuration loader
//!
//! ## Architecture
//! - Implements traits defined in `carcatalogue-core`
//! - Contains all "impure" code (network, filesystem)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod repositories;
pub mod session;

// Re-export commonly used items
pub use api::{ApiClient, ApiRequest};
pub use errors::InfraError;
pub use http::{BufferedResponse, HttpClient, SessionCookieStore};
pub use repositories::{
    HttpAdminRepository, HttpAuthRepository, HttpCarRepository, HttpContractRepository,
    HttpProfileRepository,
};
pub use session::{AuthPipeline, FileCredentialStore, InMemoryCredentialStore, SessionContext};
