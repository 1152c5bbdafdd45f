//! Bootstrap Modal Bindings

use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    type BootstrapModal;

    #[wasm_bindgen(catch, js_namespace = ["bootstrap", "Modal"], js_name = getOrCreateInstance)]
    fn get_or_create_instance(element: &Element) -> Result<BootstrapModal, JsValue>;

    #[wasm_bindgen(method)]
    fn show(this: &BootstrapModal);

    #[wasm_bindgen(method)]
    fn hide(this: &BootstrapModal);
}

/// Bootstrap fires this once the hide transition completes
pub const HIDDEN_EVENT: &str = "hidden.bs.modal";

pub fn show(element: &Element) -> bool {
    match get_or_create_instance(element) {
        Ok(modal) => {
            modal.show();
            true
        }
        Err(err) => {
            tracing::error!(error = ?err, "bootstrap.Modal unavailable");
            false
        }
    }
}

pub fn hide(element: &Element) {
    match get_or_create_instance(element) {
        Ok(modal) => modal.hide(),
        Err(err) => tracing::error!(error = ?err, "bootstrap.Modal unavailable"),
    }
}
