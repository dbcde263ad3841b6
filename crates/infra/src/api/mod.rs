//! Remote API access
//!
//! [`ApiRequest`] describes a call, [`endpoints`] builds one per remote
//! operation and [`ApiClient`] sends it through the session pipeline.

pub mod client;
pub mod endpoints;
pub mod request;

pub use client::ApiClient;
pub use request::{ApiRequest, MultipartPart, RequestBody};
