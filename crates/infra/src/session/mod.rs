//! Session plumbing: credential stores, the authenticated-fetch pipeline and
//! the context that wires them to the transport.

pub mod context;
pub mod pipeline;
pub mod store;

pub use context::{SessionContext, SessionContextBuilder};
pub use pipeline::AuthPipeline;
pub use store::{FileCredentialStore, InMemoryCredentialStore};
