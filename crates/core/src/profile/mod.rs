//! Profile ports
pub mod ports;
