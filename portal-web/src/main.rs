//! GenBank Web Portal
//!
//! Browser frontend for the family banking backend: registration, login and
//! a session-gated dashboard.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod components;
mod config;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Initialize logger
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("GenBank portal starting");

    // Hide loading screen immediately when WASM loads
    hide_loading_screen();

    // Mount the Leptos app
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading placeholder once the WASM bundle has taken over.
fn hide_loading_screen() {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };

    if let Some(loading) = document.get_element_by_id("portal-loading") {
        if let Some(element) = loading.dyn_ref::<HtmlElement>() {
            element.class_list().add_1("hidden").ok();
        }
        loading.set_attribute("style", "display: none;").ok();
    } else {
        log::warn!("Loading element not found");
    }
}
