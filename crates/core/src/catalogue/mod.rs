//! Catalogue ports
pub mod ports;
