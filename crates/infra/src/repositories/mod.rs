//! HTTP implementations of the core repository ports.
//!
//! Each repository is a thin mapping from port method to endpoint; retries,
//! caching and business rules live elsewhere.

pub mod admin;
pub mod auth;
pub mod cars;
pub mod contracts;
pub mod profile;

pub use admin::HttpAdminRepository;
pub use auth::HttpAuthRepository;
pub use cars::HttpCarRepository;
pub use contracts::HttpContractRepository;
pub use profile::HttpProfileRepository;
