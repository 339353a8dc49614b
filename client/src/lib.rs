//! Browser client for the authentication demo.
//!
//! ARCHITECTURE
//! ============
//! `state` holds the pure controller and its command model, `net` the
//! backend contract, `pages`/`components` the Leptos views that drive the
//! controller, and `util` the browser glue. The `hydrate` entry point below
//! is only compiled into the WASM bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"console logger already initialised".into());
    }
    leptos::mount::hydrate_body(app::App);
}
