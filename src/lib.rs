//! # campus-client
//!
//! Leptos + WASM frontend for the Campus education-management application.
//!
//! The heart of the crate is the client-side authentication lifecycle:
//! a durable session store (`state::session`), a thin REST client over the
//! auth endpoints (`net`), the process-wide auth state machine
//! (`state::auth`, `state::context`), role-gated routing
//! (`components::route_guard`, `util::auth`), and the failure-to-message
//! classifier (`util::errors`). Pages and components are thin shells that
//! exercise that contract.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount over the server HTML.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
