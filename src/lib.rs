//! # workshop-client
//!
//! Leptos + WASM frontend for the workshop administration application.
//!
//! This crate contains pages, components, application state, network types,
//! and the selection utilities for the training-requests workflow: a
//! tri-state select-all checkbox over the request rows, session-storage
//! persistence that keeps the selection across reloads within one tab, and
//! action links that always carry the selected identifiers in their `ids`
//! query parameter.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
