//! Contracts ports
pub mod ports;
