use thiserror::Error;

/// Failures of the page scripts that reach the log instead of the user
#[derive(Debug, Error)]
pub enum PageError {
    #[error("no window object")]
    NoWindow,
    #[error("no document object")]
    NoDocument,
    #[error("no body element")]
    NoBody,
    #[error("element not found: {0}")]
    MissingElement(String),
    #[error("{context}: {message}")]
    Js { context: &'static str, message: String },
    #[error("invalid page config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

impl PageError {
    /// Wraps a thrown JS value, keeping its debug rendering.
    pub fn js(context: &'static str, value: wasm_bindgen::JsValue) -> Self {
        PageError::Js {
            context,
            message: format!("{:?}", value),
        }
    }
}
