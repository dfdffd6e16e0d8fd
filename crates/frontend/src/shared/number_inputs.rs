//! Price and rate inputs are normalised to two decimals when they lose focus

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

use super::dom;
use super::number_format::{parse_float, to_fixed};

pub const MONEY_INPUT_SELECTOR: &str =
    "input[type=\"number\"][name*=\"price\"], input[type=\"number\"][name*=\"rate\"]";

/// Value to write back on blur; `None` leaves unparsable input as typed.
pub fn normalized_money_value(value: &str) -> Option<String> {
    parse_float(value).map(|v| to_fixed(v, 2))
}

/// Attaches the blur formatter to every price/rate input; returns the count.
pub fn bind_money_inputs(document: &Document) -> usize {
    let inputs: Vec<HtmlInputElement> = dom::query_all(document, MONEY_INPUT_SELECTOR)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlInputElement>().ok())
        .collect();
    for input in &inputs {
        let target = input.clone();
        dom::listen(input, "blur", move |_| {
            if let Some(value) = normalized_money_value(&target.value()) {
                target.set_value(&value);
            }
        });
    }
    inputs.len()
}
