//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome and gating surfaces while reading auth
//! state from the Leptos context provider.

pub mod app_header;
pub mod error_banner;
pub mod pending_notice;
pub mod route_guard;
