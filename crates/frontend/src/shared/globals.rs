//! Functions the page templates call from inline handlers, installed on
//! `window` under their template names

use contracts::enums::alert_kind::AlertKind;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use web_sys::Window;

use super::{alerts, currency, dom, export, number_format};
use super::error::PageError;
use crate::domain::product_type::delete_product;
use crate::domain::production::{calculate_total, edit_production};

/// Renders a numeric record id the way templates print it (`7`, not `7.0`).
pub fn id_from_number(value: f64) -> Option<String> {
    if !value.is_finite() {
        None
    } else if value.fract() == 0.0 {
        Some(format!("{:.0}", value))
    } else {
        Some(value.to_string())
    }
}

fn id_arg(value: &JsValue) -> Option<String> {
    value
        .as_f64()
        .and_then(id_from_number)
        .or_else(|| value.as_string().filter(|s| !s.trim().is_empty()))
}

/// `Number(value)` for the argument kinds templates pass.
fn amount_arg(value: &JsValue) -> f64 {
    if let Some(number) = value.as_f64() {
        number
    } else if let Some(text) = value.as_string() {
        number_format::number_from_str(&text)
    } else if let Some(flag) = value.as_bool() {
        if flag { 1.0 } else { 0.0 }
    } else if value.is_null() {
        0.0
    } else {
        f64::NAN
    }
}

fn set_global(window: &Window, name: &str, function: JsValue) -> Result<(), PageError> {
    js_sys::Reflect::set(window, &JsValue::from_str(name), &function)
        .map(|_| ())
        .map_err(|e| PageError::js("Failed to expose global", e))
}

/// Installs `calculateTotal`, `deleteProduct`, `showAlert`,
/// `formatCurrency`, `exportTableToCSV` and `editProduction` on `window`.
pub fn expose_globals() -> Result<(), PageError> {
    let window = dom::window()?;

    set_global(
        &window,
        "calculateTotal",
        Closure::<dyn Fn()>::new(calculate_total).into_js_value(),
    )?;

    set_global(
        &window,
        "deleteProduct",
        Closure::<dyn Fn(JsValue)>::new(|id: JsValue| match id_arg(&id) {
            Some(id) => delete_product(&id),
            None => log::warn!("deleteProduct called without an id: {:?}", id),
        })
        .into_js_value(),
    )?;

    set_global(
        &window,
        "showAlert",
        Closure::<dyn Fn(JsValue, JsValue)>::new(|message: JsValue, kind: JsValue| {
            let message = message.as_string().unwrap_or_default();
            let kind = kind
                .as_string()
                .map(|k| AlertKind::from_code_or_default(&k))
                .unwrap_or_default();
            alerts::notify(&message, kind);
        })
        .into_js_value(),
    )?;

    set_global(
        &window,
        "formatCurrency",
        Closure::<dyn Fn(JsValue, JsValue) -> String>::new(|amount: JsValue, code: JsValue| {
            currency::format_currency_code(amount_arg(&amount), code.as_string().as_deref())
        })
        .into_js_value(),
    )?;

    set_global(
        &window,
        "exportTableToCSV",
        Closure::<dyn Fn(JsValue)>::new(|filename: JsValue| {
            if let Err(e) = export::export_table_to_csv(filename.as_string().as_deref()) {
                log::error!("CSV export failed: {}", e);
            }
        })
        .into_js_value(),
    )?;

    set_global(
        &window,
        "editProduction",
        Closure::<dyn Fn(JsValue)>::new(|id: JsValue| {
            edit_production(&id_arg(&id).unwrap_or_default());
        })
        .into_js_value(),
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_number() {
        assert_eq!(id_from_number(7.0), Some("7".into()));
        assert_eq!(id_from_number(120.0), Some("120".into()));
        assert_eq!(id_from_number(2.5), Some("2.5".into()));
        assert_eq!(id_from_number(f64::NAN), None);
        assert_eq!(id_from_number(f64::INFINITY), None);
    }
}
