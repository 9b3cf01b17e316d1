//! Number formatting utilities for human-readable display.
//!
//! Handles f64 values with comma thousands separators and a bounded number of
//! fraction digits. Currency-aware helpers live in the `currency` sibling module.

/// Adds thousands separators to an already formatted number string.
///
/// The sign and fraction part are kept as they are: `"-1234567.5"` becomes
/// `"-1,234,567.5"`.
pub fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Trims trailing zeros (and a dangling point) from a fixed-point string.
pub fn trim_fraction(formatted: &str) -> &str {
    if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted
    }
}

/// Format with at most `max_decimals` fraction digits, trailing zeros trimmed,
/// thousands grouped. Non-finite values are rendered as-is.
pub fn display_with_max_decimals(amount: f64, max_decimals: usize) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }
    let fixed = format!("{:.1$}", amount, max_decimals);
    let trimmed = trim_fraction(&fixed);
    // "-0" after rounding a tiny negative value.
    let trimmed = if trimmed == "-0" { "0" } else { trimmed };
    group_thousands(trimmed)
}

/// Format with exactly `decimals` fraction digits and thousands grouping.
pub fn display_fixed(amount: f64, decimals: usize) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }
    group_thousands(&format!("{:.1$}", amount, decimals))
}
