//! Admin ports
pub mod ports;
