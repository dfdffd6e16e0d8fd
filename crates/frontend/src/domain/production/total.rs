//! Quantity × price = total on the production forms

use web_sys::Document;

use crate::shared::dom;
use crate::shared::number_format::{parse_float_or_zero, to_fixed};

pub const QUANTITY_INPUT: &str = "quantity";
pub const PRICE_INPUT: &str = "price_per_unit_usd";
pub const TOTAL_INPUT: &str = "total";

/// Total with two decimals; unparsable values count as zero.
///
/// # Examples
///
/// ```
/// use frontend::domain::production::total::compute_total;
/// assert_eq!(compute_total("3", "2.5"), "7.50");
/// assert_eq!(compute_total("", "2.5"), "0.00");
/// ```
pub fn compute_total(quantity: &str, price: &str) -> String {
    to_fixed(parse_float_or_zero(quantity) * parse_float_or_zero(price), 2)
}

/// Recomputes the total field of the current page, if it has one.
pub fn calculate_total() {
    let Ok(document) = dom::document() else {
        return;
    };
    update_total(&document);
}

fn update_total(document: &Document) {
    let read = |name: &str| {
        dom::named_input(document, name)
            .map(|input| input.value())
            .unwrap_or_default()
    };
    let total = compute_total(&read(QUANTITY_INPUT), &read(PRICE_INPUT));
    if let Some(total_input) = dom::named_input(document, TOTAL_INPUT) {
        total_input.set_value(&total);
    }
}

/// Recomputes the total whenever quantity or price changes.
///
/// Pages without both inputs are left alone; returns whether listeners were
/// attached.
pub fn bind_total_inputs(document: &Document) -> bool {
    let (Some(quantity), Some(price)) = (
        dom::named_input(document, QUANTITY_INPUT),
        dom::named_input(document, PRICE_INPUT),
    ) else {
        return false;
    };
    for input in [quantity, price] {
        dom::listen(&input, "change", |_| calculate_total());
    }
    true
}
