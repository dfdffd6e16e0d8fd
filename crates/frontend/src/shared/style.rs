//! Keyframes used by the fade-out removals

use super::dom;
use super::error::PageError;

const STYLE_ELEMENT_ID: &str = "page-fade-out-style";

pub const FADE_OUT_KEYFRAMES: &str = r#"
    @keyframes fadeOut {
        from {
            opacity: 1;
            transform: translateY(0);
        }
        to {
            opacity: 0;
            transform: translateY(-20px);
        }
    }
"#;

/// Appends the `fadeOut` keyframes to `<head>` unless already present.
pub fn inject_fade_out_style() -> Result<(), PageError> {
    let document = dom::document()?;
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(());
    }
    let head = document
        .head()
        .ok_or_else(|| PageError::MissingElement("head".into()))?;
    let style = document
        .create_element("style")
        .map_err(|e| PageError::js("Failed to create style", e))?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(FADE_OUT_KEYFRAMES));
    head.append_child(&style)
        .map_err(|e| PageError::js("Failed to append style", e))?;
    Ok(())
}
