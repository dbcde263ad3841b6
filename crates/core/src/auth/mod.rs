//! Auth ports
pub mod ports;
