use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlAnchorElement};

use crate::shared::dom;

pub const NAV_LINK_SELECTOR: &str = ".navbar-nav a";
pub const ACTIVE_CLASS: &str = "active";

/// Marks navbar links pointing at the current path as `active`; returns how
/// many were marked.
pub fn highlight_active_links(document: &Document) -> usize {
    let Some(current) = document.location().and_then(|l| l.pathname().ok()) else {
        return 0;
    };

    let mut marked = 0;
    for link in dom::query_all(document, NAV_LINK_SELECTOR)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlAnchorElement>().ok())
    {
        if link.pathname() == current && link.class_list().add_1(ACTIVE_CLASS).is_ok() {
            marked += 1;
        }
    }
    marked
}
