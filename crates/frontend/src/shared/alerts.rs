//! Transient notification banners at the top of the page container

use std::cell::RefCell;
use std::future::Future;

use contracts::enums::alert_kind::AlertKind;
use gloo_timers::future::TimeoutFuture;
use leptos::mount::mount_to;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;

use super::dom;
use super::error::PageError;
use crate::config::PageConfig;

/// When a shown banner starts fading and how long the fade runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DismissSchedule {
    pub visible_ms: u32,
    pub fade_ms: u32,
    pub animation: String,
}

impl DismissSchedule {
    pub fn from_config(config: &PageConfig) -> Self {
        Self {
            visible_ms: config.alert_dismiss_ms,
            fade_ms: config.fade_out_ms,
            animation: config.fade_out_animation(),
        }
    }

    /// Time from insertion until the banner leaves the DOM.
    pub fn removed_after_ms(&self) -> u32 {
        self.visible_ms.saturating_add(self.fade_ms)
    }
}

/// A banner that can be faded and taken off the page
pub trait DismissibleBanner {
    fn start_fade(&self, animation: &str);
    fn remove(&self);
}

/// Waits out the schedule with `sleep`, fades the banner, then removes it.
pub async fn run_dismissal<B, S, F>(schedule: &DismissSchedule, banner: &B, sleep: S)
where
    B: DismissibleBanner,
    S: Fn(u32) -> F,
    F: Future<Output = ()>,
{
    sleep(schedule.visible_ms).await;
    banner.start_fade(&schedule.animation);
    sleep(schedule.fade_ms).await;
    banner.remove();
}

/// Banner element on the live page together with its mounted content
struct MountedBanner<H> {
    element: HtmlElement,
    content: RefCell<Option<H>>,
}

impl<H> DismissibleBanner for MountedBanner<H> {
    fn start_fade(&self, animation: &str) {
        let _ = self.element.style().set_property("animation", animation);
    }

    fn remove(&self) {
        // Unmounting first; the close button may already have detached it
        self.content.borrow_mut().take();
        self.element.remove();
    }
}

/// Prepends a dismissible `.alert` banner to the alert container and removes
/// it after the configured delay with the fade-out animation.
///
/// Fails when the page has no alert container.
pub fn show_alert(message: &str, kind: AlertKind) -> Result<(), PageError> {
    let config = crate::config::get();
    let document = dom::document()?;
    let selector = &config.alert_container_selector;
    let container = dom::query_one(&document, selector)
        .ok_or_else(|| PageError::MissingElement(selector.clone()))?;

    let element = document
        .create_element("div")
        .map_err(|e| PageError::js("Failed to create alert", e))?
        .dyn_into::<HtmlElement>()
        .map_err(|e| PageError::js("Failed to cast alert", e.into()))?;
    element.set_class_name(&kind.banner_class());
    element
        .set_attribute("role", "alert")
        .map_err(|e| PageError::js("Failed to set alert role", e))?;
    container
        .insert_before(&element, container.first_child().as_ref())
        .map_err(|e| PageError::js("Failed to insert alert", e))?;

    let message = message.to_string();
    let content = mount_to(element.clone(), move || banner::render(message));
    let banner = MountedBanner {
        element,
        content: RefCell::new(Some(content)),
    };

    let schedule = DismissSchedule::from_config(config);
    spawn_local(async move {
        run_dismissal(&schedule, &banner, TimeoutFuture::new).await;
    });
    Ok(())
}

mod banner {
    use leptos::prelude::*;

    /// Message text and the Bootstrap close button; the text is never parsed
    /// as HTML.
    pub fn render(message: String) -> impl IntoView {
        view! {
            {message}
            <button type="button" class="btn-close" data-bs-dismiss="alert"></button>
        }
    }
}

/// [`show_alert`] for callers with nowhere to report the failure.
pub fn notify(message: &str, kind: AlertKind) {
    if let Err(e) = show_alert(message, kind) {
        log::error!("Failed to show {} alert: {}", kind, e);
    }
}
