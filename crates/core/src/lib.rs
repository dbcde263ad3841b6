//! # Car Catalogue Core
//!
//! Ports and client-side state machines - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces (traits) for credential storage and remote repositories
//! - The pagination state machine shared by every list screen
//! - Clock abstraction and the explicit best-effort result type
//!
//! ## Architecture Principles
//! - Only depends on `carcatalogue-domain`
//! - No HTTP, filesystem or platform code
//! - All external dependencies via traits

pub mod admin;
pub mod auth;
pub mod best_effort;
pub mod catalogue;
pub mod clock;
pub mod contracts;
pub mod pagination;
pub mod profile;
pub mod session;

pub use admin::ports::AdminRepository;
pub use auth::ports::AuthRepository;
pub use best_effort::BestEffort;
pub use catalogue::ports::CarRepository;
pub use clock::{Clock, ManualClock, SystemClock};
pub use contracts::ports::ContractRepository;
pub use pagination::{LoadOutcome, PageState, Paginator};
pub use profile::ports::ProfileRepository;
pub use session::ports::CredentialStore;
