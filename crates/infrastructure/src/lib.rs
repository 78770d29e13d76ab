//! Zonehost Infrastructure Layer
//!
//! Adapters for the application ports: the live zone store, zone files on
//! disk, the upstream recursor and the wire-level request handler.
pub mod dns;
pub mod repositories;
