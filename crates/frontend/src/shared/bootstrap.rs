//! Bindings to the Bootstrap bundle loaded by the page templates

use wasm_bindgen::prelude::*;
use web_sys::Element;

use super::dom;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Tooltip;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    fn new(element: &Element) -> Result<Tooltip, JsValue>;
}

/// Creates a Bootstrap tooltip for every `[data-bs-toggle="tooltip"]`.
///
/// Returns how many were created; a missing Bootstrap global is logged once
/// and stops the loop.
pub fn init_tooltips(document: &web_sys::Document) -> usize {
    let mut created = 0;
    for element in dom::query_all(document, "[data-bs-toggle=\"tooltip\"]") {
        match Tooltip::new(&element) {
            Ok(_) => created += 1,
            Err(e) => {
                log::warn!("Bootstrap tooltips unavailable: {:?}", e);
                break;
            }
        }
    }
    created
}
