//! # client
//!
//! Leptos + WASM single-page frontend for agentdesk.
//!
//! This crate contains the routed pages, the route guard component, the
//! reactive mirror of the session, and the browser bindings (`fetch` via
//! `gloo-net`, `localStorage` via `web-sys`) that plug into the
//! framework-agnostic `agentdesk` core.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
