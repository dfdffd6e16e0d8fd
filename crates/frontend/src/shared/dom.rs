//! Small helpers over `web_sys` for querying the server-rendered page

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlInputElement, NodeList, Window};

use super::error::PageError;

pub fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or(PageError::NoWindow)
}

pub fn document() -> Result<Document, PageError> {
    window()?.document().ok_or(PageError::NoDocument)
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// All elements of the document matching `selector`; an invalid selector
/// matches nothing.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(elements)
        .unwrap_or_default()
}

/// Same as [`query_all`] scoped to the descendants of `root`.
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(elements)
        .unwrap_or_default()
}

pub fn query_one(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// `input[name="{name}"]`, if the page has one.
pub fn named_input(document: &Document, name: &str) -> Option<HtmlInputElement> {
    query_one(document, &format!("input[name=\"{}\"]", name))
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
}

/// Text content with surrounding whitespace removed.
pub fn trimmed_text(element: &Element) -> String {
    element
        .text_content()
        .unwrap_or_default()
        .trim()
        .to_string()
}

/// Attaches `handler` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("Failed to attach {} listener: {:?}", event, e);
        return;
    }
    closure.forget();
}

/// Blocking `window.confirm`; a failing dialog counts as declined.
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| {
            w.confirm_with_message(message)
                .map_err(|e| PageError::js("confirm failed", e))
        })
        .unwrap_or(false)
}

/// Blocking `window.alert`.
pub fn alert(message: &str) {
    if let Ok(w) = window() {
        let _ = w.alert_with_message(message);
    }
}
