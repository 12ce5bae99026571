//! # client
//!
//! Leptos + WASM frontend for the single-page portfolio site.
//!
//! This crate contains the page, section components, theme state, and the
//! browser-storage glue. The `server` crate renders it through
//! [`app::shell`] and the browser hydrates it via [`hydrate`].

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: take over the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
