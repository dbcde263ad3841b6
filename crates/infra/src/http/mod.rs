//! HTTP transport
//!
//! The reqwest client and the cookie jar it shares with the session
//! pipeline.

pub mod client;
pub mod cookies;
pub mod response;

pub use client::{HttpClient, HttpClientBuilder};
pub use cookies::SessionCookieStore;
pub use response::BufferedResponse;
