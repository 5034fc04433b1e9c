//! Networking modules for the external REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues one HTTP call per operation, `error` defines the failure
//! taxonomy, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
