//! # peer-review-ui
//!
//! Leptos + WASM browser client for the peer-review grading platform.
//!
//! This crate contains session bootstrap from a stored bearer token, the
//! paginated list fetcher used by admin tables, and the grading workspace
//! where students mark their assigned peers against a question's rubrics.
//! Browser-only code sits behind the `csr` feature; everything else builds
//! and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic and log hooks, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    leptos::mount::mount_to_body(app::App);
}
