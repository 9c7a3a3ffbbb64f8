//! # aarogya-client
//!
//! WASM controller for the Aarogya dashboard. The backend renders the page;
//! this crate binds the chat and medical-report behaviors to it: loading and
//! appending chat fragments, listing reports, submitting the report form,
//! and transcribing voice input into the chat box.
//!
//! Browser glue lives behind the `hydrate` feature. Everything that decides
//! what a region should display is plain Rust and tested natively.

pub mod config;
pub mod error;
pub mod net;
pub mod render;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod app;
#[cfg(feature = "hydrate")]
pub mod components;

/// WASM start hook.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_bindgen_futures::spawn_local(app::run());
}
