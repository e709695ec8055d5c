// lib.rs - Root module for the shopfront library

/// Sample catalog data for tests and local development
pub mod fixtures;

pub mod web_app;

/// WASM entry point: hydrate the server-rendered page
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(web_app::App);
}
