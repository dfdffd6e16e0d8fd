//! Runtime configuration of the page scripts
//!
//! Pages may embed `<script type="application/json" id="page-config">` to
//! override any of the defaults below; missing keys keep their default.

use contracts::domain::product_type::PRODUCT_TYPE_BASE_PATH;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use web_sys::Document;

use crate::shared::dom;
use crate::shared::error::PageError;

pub const CONFIG_ELEMENT_ID: &str = "page-config";

static CONFIG: OnceCell<PageConfig> = OnceCell::new();

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// `log` level name for the browser console
    pub log_level: String,
    /// Element receiving notification banners
    pub alert_container_selector: String,
    pub alert_dismiss_ms: u32,
    /// Length of the `fadeOut` animation before an element is removed
    pub fade_out_ms: u32,
    pub product_type_base_path: String,
    pub default_export_filename: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            log_level: "debug".to_string(),
            alert_container_selector: ".container".to_string(),
            alert_dismiss_ms: 5000,
            fade_out_ms: 300,
            product_type_base_path: PRODUCT_TYPE_BASE_PATH.to_string(),
            default_export_filename: "export.csv".to_string(),
        }
    }
}

impl PageConfig {
    pub fn from_json(json: &str) -> Result<Self, PageError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Unknown level names fall back to `Debug`.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Debug)
    }

    /// CSS `animation` value for the fade-out applied before removal.
    pub fn fade_out_animation(&self) -> String {
        format!("fadeOut {}s ease", self.fade_out_ms as f64 / 1000.0)
    }
}

/// Reads the embedded config element; pages without one get the defaults.
pub fn read_page_config(document: &Document) -> Result<PageConfig, PageError> {
    match document.get_element_by_id(CONFIG_ELEMENT_ID) {
        Some(element) => {
            let text = element.text_content().unwrap_or_default();
            if text.trim().is_empty() {
                Ok(PageConfig::default())
            } else {
                PageConfig::from_json(&text)
            }
        }
        None => Ok(PageConfig::default()),
    }
}

/// Loads the config from the current document, keeping the parse failure so
/// it can be logged once logging is up.
pub fn load() -> (PageConfig, Option<PageError>) {
    match dom::document().and_then(|d| read_page_config(&d)) {
        Ok(config) => (config, None),
        Err(e) => (PageConfig::default(), Some(e)),
    }
}

/// Installs the page config; later calls keep the first value.
pub fn install(config: PageConfig) {
    let _ = CONFIG.set(config);
}

pub fn get() -> &'static PageConfig {
    CONFIG.get_or_init(PageConfig::default)
}
