//! AIGuardian landing page, compiled to WebAssembly.
//!
//! Static marketing content plus a Phantom connect button whose result is
//! kept in the tab's `sessionStorage`. There is no backend.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
pub mod error;
mod pages;
pub mod services;
pub mod session;
mod state;
pub mod utils;

use app::App;

/// Id of the placeholder element `index.html` shows until the WASM loads.
const LOADING_ELEMENT_ID: &str = "leptos-loading";

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("AIGuardian landing starting");

    hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the loading screen element
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available; cannot hide loading screen");
        return;
    };

    match document.get_element_by_id(LOADING_ELEMENT_ID) {
        Some(element) => {
            if let Err(e) = element.class_list().add_1("hidden") {
                log::warn!("Failed to hide loading screen: {:?}", e);
            }
        }
        None => log::debug!("Loading element '{}' not found", LOADING_ELEMENT_ID),
    }
}
