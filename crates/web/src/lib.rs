//! `salarycast-web`
//!
//! **Responsibility:** browser front end for the salary prediction page.
//!
//! The page markup is served by the prediction service; this crate binds to it:
//! - resolves the elements named in [`contract`] (missing ones are fatal)
//! - drives the core [`Controller`](salarycast_core::Controller) from form events
//! - projects the controller view onto the page through a Leptos signal
//! - binds the two static chart datasets to Chart.js once at startup
//! - renders the report into the print surface and opens the print dialog

pub mod contract;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod charts;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod form;
#[cfg(target_arch = "wasm32")]
mod print;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// WASM entry point, called when the module loads.
///
/// Initialization errors are returned to the host as a thrown exception; the
/// page is unusable without its elements and chart data.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    app::start().map_err(|e| JsValue::from_str(&e.to_string()))
}
