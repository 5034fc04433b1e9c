#![recursion_limit = "256"]
//! # plant-tracker-ui
//!
//! Leptos + WASM frontend for the plant health tracker. Renders the landing
//! page, login, and the sectioned dashboard, talking to the external
//! plant-tracker REST API over `net::api`.
//!
//! Built twice: with `hydrate` for the browser bundle and with `ssr` for the
//! host server, which only renders the HTML shell.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point called by the generated JS glue.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
