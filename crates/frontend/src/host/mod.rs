//! Bindings to the window-injected host API surfaces.
//!
//! The Tool Box host exposes two objects on the page: `toolboxAPI`
//! (shell utilities, connection registry, event stream) and
//! `dataverseAPI` (data-platform calls executed against the active
//! connection). Both are opaque request/response surfaces; these modules
//! only marshal arguments and results.

pub mod dataverse;
pub mod toolbox;

use wasm_bindgen::{JsCast, JsValue};

/// Render a host-side rejection as a plain message string.
pub(crate) fn js_error_message(value: JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        String::from(error.message())
    } else {
        value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"))
    }
}
