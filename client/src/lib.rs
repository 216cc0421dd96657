//! # client
//!
//! Leptos frontend for page-shell sites. Pages wrap their content in the
//! `PageShell` component, which feeds its props through the `shell` crate and
//! hands the resulting head tags to `leptos_meta`.

pub mod app;
pub mod components;
pub mod pages;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(app::App);
}
