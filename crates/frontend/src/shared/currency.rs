//! Currency display with the fixed `ar-LB` rules used across the pages

use contracts::enums::currency::Currency;

use super::number_format::{fixed_digits, group_thousands};

/// Right-to-left mark placed before amounts so they stay isolated in RTL text
const RLM: char = '\u{200F}';
/// No-break space between the number and the symbol
const NBSP: char = '\u{00A0}';

/// Formats `amount` as a currency string.
///
/// # Examples
///
/// ```
/// use contracts::enums::currency::Currency;
/// use frontend::shared::currency::format_currency;
/// assert_eq!(format_currency(1234.5, Currency::Usd), "\u{200F}1,234.50\u{00A0}US$");
/// ```
pub fn format_currency(amount: f64, currency: Currency) -> String {
    let number = if amount.is_nan() {
        "NaN".to_string()
    } else if amount.is_infinite() {
        if amount > 0.0 { "∞" } else { "-∞" }.to_string()
    } else {
        group_thousands(&fixed_digits(amount, currency.fraction_digits()), ',')
    };
    format!("{}{}{}{}", RLM, number, NBSP, currency.symbol())
}

/// Same as [`format_currency`] with the currency given by code; anything but
/// `LBP` formats as USD.
pub fn format_currency_code(amount: f64, code: Option<&str>) -> String {
    format_currency(amount, code.map(Currency::from_code).unwrap_or_default())
}
