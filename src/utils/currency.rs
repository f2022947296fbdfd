//! Currency formatting utilities for USD fee values
//!
//! This module provides standardised US-locale formatting (comma-grouped
//! thousands, `$` prefix) for fee totals, savings and operation counts.

use crate::fees::constants::CURRENCY_DECIMAL_PLACES;

/// Insert comma separators into a string of ASCII digits
pub(crate) fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}

/// Render a non-negative fixed-point string with grouped integer part
fn group_fixed(fixed: &str) -> String {
    match fixed.split_once('.') {
        Some((integer, fraction)) => format!("{}.{}", group_thousands(integer), fraction),
        None => group_thousands(fixed),
    }
}

/// Round to `decimals` places with ties going away from zero
///
/// `{:.*}` alone rounds exact binary ties to even (`2.5` -> `2`).
fn round_half_away(value: f64, decimals: usize) -> f64 {
    // Beyond f64 precision there is nothing left to round
    if decimals >= 16 {
        return value;
    }

    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Format a USD amount with a fixed number of decimal places
///
/// # Examples
/// ```
/// use ops_by_hive::utils::currency::format_currency;
///
/// assert_eq!(format_currency(1234.56, 2), "$1,234.56");
/// assert_eq!(format_currency(12600.0, 0), "$12,600");
/// assert_eq!(format_currency(-1500.5, 2), "-$1,500.50");
/// assert_eq!(format_currency(10.5, 0), "$11");
/// ```
pub fn format_currency(amount: f64, decimals: usize) -> String {
    if !amount.is_finite() {
        return format!("${}", amount);
    }

    let fixed = format!("{:.*}", decimals, round_half_away(amount.abs(), decimals));
    // Negative amounts keep their sign even when they round to zero
    let sign = if amount < 0.0 { "-" } else { "" };

    format!("{}${}", sign, group_fixed(&fixed))
}

/// Format a USD amount with the default two decimal places
///
/// # Examples
/// ```
/// use ops_by_hive::utils::currency::format_usd;
///
/// assert_eq!(format_usd(0.5), "$0.50");
/// ```
pub fn format_usd(amount: f64) -> String {
    format_currency(amount, CURRENCY_DECIMAL_PLACES)
}

/// Format a large count with thousand separators, dropping any fraction
///
/// # Examples
/// ```
/// use ops_by_hive::utils::currency::format_large_number;
///
/// assert_eq!(format_large_number(1234567.0), "1,234,567");
/// assert_eq!(format_large_number(999.99), "999");
/// ```
pub fn format_large_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let floored = value.floor();
    let digits = format!("{:.0}", floored.abs());
    let sign = if floored < 0.0 { "-" } else { "" };
    format!("{}{}", sign, group_thousands(&digits))
}

/// Format a percentage value with a fixed number of decimal places
///
/// # Examples
/// ```
/// use ops_by_hive::utils::currency::format_percentage;
///
/// assert_eq!(format_percentage(45.678, 2), "45.68%");
/// assert_eq!(format_percentage(0.000123, 6), "0.000123%");
/// ```
pub fn format_percentage(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return format!("{}%", value);
    }
    format!("{:.*}%", decimals, round_half_away(value, decimals))
}
