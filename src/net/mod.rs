//! Networking modules for the peer-review REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues HTTP calls and `types` defines the shared wire schema.

pub mod api;
pub mod types;
