//! Zonehost Application Layer
//!
//! Ports implemented by the infrastructure crate, the resolution engine and
//! the services it is built from.
pub mod ports;
pub mod services;
pub mod use_cases;
