//! Number parsing and formatting shared by the page scripts
//!
//! Input fields hold whatever the user typed, so parsing follows the
//! browser's `parseFloat`: the longest numeric prefix wins and the rest of
//! the string is ignored.

/// Parses the longest numeric prefix of `input` after leading whitespace.
///
/// Returns `None` where `parseFloat` would return `NaN`.
///
/// # Examples
///
/// ```
/// use frontend::shared::number_format::parse_float;
/// assert_eq!(parse_float(" 12.5kg"), Some(12.5));
/// assert_eq!(parse_float("abc"), None);
/// ```
pub fn parse_float(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        let value = f64::INFINITY;
        return Some(if s.starts_with('-') { -value } else { value });
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// `parseFloat(value) || 0`: unparsable input and zero both read as `0.0`.
pub fn parse_float_or_zero(input: &str) -> f64 {
    match parse_float(input) {
        Some(value) if value != 0.0 => value,
        _ => 0.0,
    }
}

/// `value` with exactly `decimals` fraction digits.
///
/// Rounds the exact binary value; only exact decimal ties (`0.125`) are
/// broken, away from zero. `2.675` is stored just below the tie and rounds
/// down.
pub fn fixed_digits(value: f64, decimals: usize) -> String {
    if is_decimal_tie(value, decimals) {
        // One ulp further from zero lands strictly past the tie
        let nudged = f64::from_bits(value.to_bits() + 1);
        return format!("{:.*}", decimals, nudged);
    }
    format!("{:.*}", decimals, value)
}

/// True when `value` sits exactly halfway between two `decimals`-digit
/// decimals.
fn is_decimal_tie(value: f64, decimals: usize) -> bool {
    // A tie needs at most `decimals + 1` binary fraction digits
    let scaled = value * 2f64.powi(decimals as i32 + 1);
    scaled.is_finite()
        && scaled.fract() == 0.0
        && format!("{:.*}", decimals + 1, value).ends_with('5')
}

/// Formats like `Number.prototype.toFixed`.
///
/// Negative zero prints unsigned, magnitudes from `1e21` use exponent
/// notation and non-finite values print as `NaN`, `Infinity` or
/// `-Infinity`.
pub fn to_fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value.abs() >= 1e21 {
        return format!("{:e}", value).replacen('e', "e+", 1);
    }
    let value = if value == 0.0 { 0.0 } else { value };
    fixed_digits(value, decimals)
}

/// `Number(input)` for strings: the whole trimmed text must be a number,
/// an empty string is zero and anything else is `NaN`.
pub fn number_from_str(input: &str) -> f64 {
    let s = input.trim();
    if s.is_empty() {
        return 0.0;
    }
    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            return u64::from_str_radix(digits, radix)
                .map(|v| v as f64)
                .unwrap_or(f64::NAN);
        }
    }
    // Rust also accepts `inf` and `nan`, which `Number` does not
    if !s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// Inserts `separator` every three digits of the integer part of `formatted`.
///
/// `formatted` is a plain decimal string such as `-1234567.89`.
pub fn group_thousands(formatted: &str, separator: char) -> String {
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted, None),
    };

    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(separator);
        }
        result.push(*c);
    }
    let formatted_integer: String = result.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_float_prefixes() {
        assert_eq!(parse_float("3"), Some(3.0));
        assert_eq!(parse_float("  2.75  "), Some(2.75));
        assert_eq!(parse_float("12abc"), Some(12.0));
        assert_eq!(parse_float(".5"), Some(0.5));
        assert_eq!(parse_float("5."), Some(5.0));
        assert_eq!(parse_float("-4.2e1x"), Some(-42.0));
        assert_eq!(parse_float("7e"), Some(7.0));
        assert_eq!(parse_float("1.2.3"), Some(1.2));
        assert_eq!(parse_float("-Infinity"), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn test_parse_float_rejects() {
        assert_eq!(parse_float(""), None);
        assert_eq!(parse_float("   "), None);
        assert_eq!(parse_float("abc"), None);
        assert_eq!(parse_float("-"), None);
        assert_eq!(parse_float("."), None);
        assert_eq!(parse_float("1,5"), Some(1.0));
    }

    #[test]
    fn test_parse_float_or_zero() {
        assert_eq!(parse_float_or_zero("x"), 0.0);
        assert_eq!(parse_float_or_zero("-0"), 0.0);
        assert!(parse_float_or_zero("-0").is_sign_positive());
        assert_eq!(parse_float_or_zero("8.5"), 8.5);
    }

    #[test]
    fn test_to_fixed() {
        assert_eq!(to_fixed(0.0, 2), "0.00");
        assert_eq!(to_fixed(-0.0, 2), "0.00");
        assert_eq!(to_fixed(-0.001, 2), "-0.00");
        assert_eq!(to_fixed(12.0, 2), "12.00");
        assert_eq!(to_fixed(1234.5, 0), "1235");
        assert_eq!(to_fixed(0.5, 0), "1");
        assert_eq!(to_fixed(f64::NAN, 2), "NaN");
        assert_eq!(to_fixed(f64::INFINITY, 2), "Infinity");
    }

    #[test]
    fn test_to_fixed_rounds_the_stored_value() {
        assert_eq!(to_fixed(2.675, 2), "2.67");
        assert_eq!(to_fixed(0.615, 2), "0.61");
        assert_eq!(to_fixed(10.235, 2), "10.23");
        assert_eq!(to_fixed(1.005, 2), "1.00");
    }

    #[test]
    fn test_to_fixed_exact_ties_round_away_from_zero() {
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(-0.125, 2), "-0.13");
        assert_eq!(to_fixed(0.375, 2), "0.38");
        assert_eq!(to_fixed(2.5, 0), "3");
    }

    #[test]
    fn test_to_fixed_huge_values() {
        assert_eq!(to_fixed(1e307, 2), "1e+307");
        assert_eq!(to_fixed(-1.5e21, 2), "-1.5e+21");
        assert_eq!(to_fixed(1e20, 2), "100000000000000000000.00");
        assert_eq!(fixed_digits(1e307, 2).len(), 311);
    }

    #[test]
    fn test_number_from_str() {
        assert_eq!(number_from_str(" 12.5 "), 12.5);
        assert_eq!(number_from_str(""), 0.0);
        assert_eq!(number_from_str("1e3"), 1000.0);
        assert_eq!(number_from_str("0x1F"), 31.0);
        assert_eq!(number_from_str("-Infinity"), f64::NEG_INFINITY);
        assert!(number_from_str("12abc").is_nan());
        assert!(number_from_str("inf").is_nan());
        assert!(number_from_str("NaN").is_nan());
        assert!(number_from_str("1,5").is_nan());
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1234.56", ','), "1,234.56");
        assert_eq!(group_thousands("1234567.89", ','), "1,234,567.89");
        assert_eq!(group_thousands("0.00", ','), "0.00");
        assert_eq!(group_thousands("-1234.56", ','), "-1,234.56");
        assert_eq!(group_thousands("-123", ','), "-123");
        assert_eq!(group_thousands("1234567", ' '), "1 234 567");
    }
}
