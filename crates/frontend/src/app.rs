//! Wiring run once the server-rendered page is parsed

use web_sys::Document;

use crate::domain::production::total::bind_total_inputs;
use crate::layout::nav_highlight::highlight_active_links;
use crate::shared::bootstrap::init_tooltips;
use crate::shared::number_inputs::bind_money_inputs;
use crate::shared::{dom, messages};

/// Delete controls that need a confirmation before following through
pub const DELETE_BUTTON_SELECTOR: &str = ".btn-delete";

/// Attaches all page behaviour. Elements a page does not have are skipped.
pub fn init_page(document: &Document) {
    let tooltips = init_tooltips(document);
    let money_inputs = bind_money_inputs(document);
    let totals = bind_total_inputs(document);
    let delete_buttons = bind_delete_confirmation(document);
    let active_links = highlight_active_links(document);

    log::debug!(
        "Page initialized: {} tooltips, {} money inputs, total binding {}, {} delete buttons, {} active links",
        tooltips,
        money_inputs,
        totals,
        delete_buttons,
        active_links
    );
}

/// Cancels the click of a delete control when the user declines.
fn bind_delete_confirmation(document: &Document) -> usize {
    let buttons = dom::query_all(document, DELETE_BUTTON_SELECTOR);
    for button in &buttons {
        dom::listen(button, "click", |event| {
            if !dom::confirm(messages::CONFIRM_DELETE) {
                event.prevent_default();
            }
        });
    }
    buttons.len()
}

/// Runs [`init_page`] on `DOMContentLoaded`, or right away when the module
/// loads after parsing finished.
pub fn run_when_ready() {
    let document = match dom::document() {
        Ok(document) => document,
        Err(e) => {
            log::error!("Page scripts not started: {}", e);
            return;
        }
    };

    if document.ready_state() != "loading" {
        init_page(&document);
        return;
    }

    let target = document.clone();
    let mut pending = Some(document);
    dom::listen(&target, "DOMContentLoaded", move |_| {
        if let Some(document) = pending.take() {
            init_page(&document);
        }
    });
}
