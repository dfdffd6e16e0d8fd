//! Remote deletion of a product type from the settings table

use contracts::domain::product_type::{product_row_element_id, DeleteProductTypeResponse};
use contracts::enums::alert_kind::AlertKind;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;

use super::api::{delete_product_type, DeleteError};
use crate::shared::{alerts, dom, messages};

/// Where the result of a delete becomes visible
pub trait DeleteFeedback {
    /// Removes the table row of product type `id`, if it is on the page.
    fn remove_row(&self, id: &str);
    fn notify(&self, message: &str, kind: AlertKind);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The server answered without `success`; carries its error text
    Refused(Option<String>),
    Failed(DeleteError),
}

impl From<Result<DeleteProductTypeResponse, DeleteError>> for DeleteOutcome {
    fn from(result: Result<DeleteProductTypeResponse, DeleteError>) -> Self {
        match result {
            Ok(response) if response.success => DeleteOutcome::Deleted,
            Ok(response) => DeleteOutcome::Refused(response.error),
            Err(e) => DeleteOutcome::Failed(e),
        }
    }
}

/// Applies the result of the delete call for product type `id`.
pub fn apply_delete_result<F: DeleteFeedback>(
    feedback: &F,
    id: &str,
    result: Result<DeleteProductTypeResponse, DeleteError>,
) -> DeleteOutcome {
    let outcome = DeleteOutcome::from(result);
    match &outcome {
        DeleteOutcome::Deleted => {
            log::debug!("Product type {} deleted", id);
            feedback.remove_row(id);
            feedback.notify(messages::PRODUCT_DELETED, AlertKind::Success);
        }
        DeleteOutcome::Refused(reason) => {
            log::warn!(
                "Product type {} not deleted: {}",
                id,
                reason.as_deref().unwrap_or("no reason given")
            );
            feedback.notify(messages::DELETE_FAILED, AlertKind::Danger);
        }
        DeleteOutcome::Failed(e) => {
            log::error!("Error: {}", e);
            feedback.notify(messages::GENERIC_ERROR, AlertKind::Danger);
        }
    }
    outcome
}

/// Live page: rows fade out before removal, messages go to the alert banner.
struct PageFeedback;

impl DeleteFeedback for PageFeedback {
    fn remove_row(&self, id: &str) {
        let Ok(document) = dom::document() else {
            return;
        };
        let Some(row) = document.get_element_by_id(&product_row_element_id(id)) else {
            return;
        };
        let config = crate::config::get();
        if let Some(row) = row.dyn_ref::<HtmlElement>() {
            let _ = row
                .style()
                .set_property("animation", &config.fade_out_animation());
        }
        let fade_ms = config.fade_out_ms;
        spawn_local(async move {
            TimeoutFuture::new(fade_ms).await;
            row.remove();
        });
    }

    fn notify(&self, message: &str, kind: AlertKind) {
        alerts::notify(message, kind);
    }
}

/// Asks for confirmation, then deletes product type `id` and updates the page.
///
/// Single attempt without timeout or cancellation.
pub fn delete_product(id: &str) {
    if !dom::confirm(messages::CONFIRM_DELETE_PRODUCT) {
        return;
    }
    let id = id.to_owned();
    spawn_local(async move {
        let result = delete_product_type(&id).await;
        apply_delete_result(&PageFeedback, &id, result);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingFeedback {
        removed: RefCell<Vec<String>>,
        notices: RefCell<Vec<(String, AlertKind)>>,
    }

    impl DeleteFeedback for RecordingFeedback {
        fn remove_row(&self, id: &str) {
            self.removed.borrow_mut().push(id.to_string());
        }

        fn notify(&self, message: &str, kind: AlertKind) {
            self.notices.borrow_mut().push((message.to_string(), kind));
        }
    }

    #[test]
    fn test_success_removes_row_and_notifies() {
        let feedback = RecordingFeedback::default();
        let response = DeleteProductTypeResponse {
            success: true,
            error: None,
        };
        let outcome = apply_delete_result(&feedback, "7", Ok(response));

        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(*feedback.removed.borrow(), vec!["7".to_string()]);
        assert_eq!(
            *feedback.notices.borrow(),
            vec![(messages::PRODUCT_DELETED.to_string(), AlertKind::Success)]
        );
    }

    #[test]
    fn test_refusal_keeps_row() {
        let feedback = RecordingFeedback::default();
        let outcome = apply_delete_result(
            &feedback,
            "7",
            Ok(DeleteProductTypeResponse {
                success: false,
                error: Some("Unauthorized".into()),
            }),
        );

        assert_eq!(outcome, DeleteOutcome::Refused(Some("Unauthorized".into())));
        assert!(feedback.removed.borrow().is_empty());
        assert_eq!(
            *feedback.notices.borrow(),
            vec![(messages::DELETE_FAILED.to_string(), AlertKind::Danger)]
        );
    }

    #[test]
    fn test_network_failure_keeps_row() {
        let feedback = RecordingFeedback::default();
        let error = DeleteError::Network("connection refused".into());
        let outcome = apply_delete_result(&feedback, "7", Err(error.clone()));

        assert_eq!(outcome, DeleteOutcome::Failed(error));
        assert!(feedback.removed.borrow().is_empty());
        assert_eq!(
            *feedback.notices.borrow(),
            vec![(messages::GENERIC_ERROR.to_string(), AlertKind::Danger)]
        );
    }

    #[test]
    fn test_unparsable_body_is_a_failure() {
        let feedback = RecordingFeedback::default();
        let parse_error = serde_json::from_str::<DeleteProductTypeResponse>("<html>")
            .map_err(|e| DeleteError::Parse(e.to_string()));
        let outcome = apply_delete_result(&feedback, "9", parse_error);

        assert!(matches!(outcome, DeleteOutcome::Failed(DeleteError::Parse(_))));
        assert_eq!(feedback.notices.borrow()[0].1, AlertKind::Danger);
    }
}
