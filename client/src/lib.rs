//! # threads-client
//!
//! Leptos + WASM frontend for the Threads service: an always-mounted shell,
//! a route table with fetch-before-render loaders, and the credential forms.
//!
//! The routing core (`routing`), the API client (`net`) and the form logic
//! (`state`) carry no DOM dependency and are tested natively. `components`
//! and `pages` are the Leptos views on top.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;

/// Hydration entry point for the WASM bundle.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
