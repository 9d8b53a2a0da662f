//! # client
//!
//! Leptos + WASM portfolio page. Renders the sections and overlay surfaces,
//! keeps the `folio` page session in a signal, applies its effects to the
//! document and mounts the `ornament` in the hero.
//!
//! Browser-only code is behind the `csr` feature; without it the crate
//! builds and tests natively.

pub mod app;
pub mod components;
pub mod content;
pub mod state;
pub mod util;

/// WASM entry point: logging, panic hook, then mount [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger not installed: {err}");
    }
    leptos::mount::mount_to_body(app::App);
}
