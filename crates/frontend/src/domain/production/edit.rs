use crate::shared::{dom, messages};

/// Editing productions is not available yet; tells the user so.
pub fn edit_production(id: &str) {
    log::debug!("Edit requested for production {}", id);
    dom::alert(messages::EDIT_NOT_READY);
}
