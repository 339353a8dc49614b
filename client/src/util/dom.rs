//! Browser location and history glue.
//!
//! All functions require a browser environment; SSR builds no-op so server
//! rendering stays deterministic.

use crate::util::url::PageLocation;

/// Query string and fragment of the current page.
pub fn current_location() -> PageLocation {
    #[cfg(feature = "hydrate")]
    {
        let Some(location) = web_sys::window().map(|w| w.location()) else {
            return PageLocation::default();
        };
        PageLocation::new(location.search().unwrap_or_default(), location.hash().unwrap_or_default())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        PageLocation::default()
    }
}

/// Replace the current history entry with `path` without reloading.
pub fn replace_url(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}

/// Full-page navigation to `url`.
pub fn redirect(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(url);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}
