//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate routing and error-surface policy from page and
//! component logic to improve reuse and testability.

pub mod auth;
pub mod errors;
