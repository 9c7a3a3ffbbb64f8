//! Networking modules for the dashboard backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls and `types` defines the JSON wire schema.

pub mod api;
pub mod types;
