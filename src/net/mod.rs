//! Networking modules for the REST auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the remote calls, `error` classifies their failures, and
//! `types` defines the shared wire schema.

pub mod api;
pub mod error;
pub mod types;
