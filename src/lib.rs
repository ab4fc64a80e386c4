//! # vetlink-client
//!
//! Leptos + WASM frontend for the VetLink veterinary marketplace.
//! Pet owners search for vets, book and pay for appointments, and send
//! emergency alerts; veterinarians manage a profile and respond to
//! bookings and emergencies.
//!
//! This crate contains pages, components, application state, the REST
//! API layer, and the session/auth bootstrap. All server interaction
//! goes through the JSON endpoints under `/api`.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
