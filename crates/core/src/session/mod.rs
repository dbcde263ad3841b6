//! Session ownership
//!
//! The credential store is the only owner of the access token and cached
//! identity. Transport code reads through it and never keeps a copy.

pub mod ports;
