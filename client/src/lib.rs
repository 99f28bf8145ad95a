//! # client
//!
//! Leptos + WASM frontend for IndiaDrive car rentals.
//!
//! This crate contains pages, components, application state, and the REST
//! client. Booking rules (pricing, validation, the wizard, the booking cache,
//! route access) live in the `booking` crate; this crate wires them to the
//! browser.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
