//! Currency-aware display helpers used by cards, tables, tickers and charts.
//!
//! All functions are total: unknown currency codes fall back to the `usd`
//! glyph and non-finite amounts are rendered verbatim.

use super::num::{display_fixed, display_with_max_decimals};
use crate::shared::Currency;

/// Fraction digits kept by [`format_currency`].
const CURRENCY_MAX_DECIMALS: usize = 3;

const COMPACT_UNITS: [(f64, &str); 3] = [(1e9, "B"), (1e6, "M"), (1e3, "K")];

/// Display glyph for a currency code. Case-insensitive; unknown codes get `$`.
pub fn currency_symbol(code: &str) -> &'static str {
    code.parse::<Currency>()
        .unwrap_or_default()
        .symbol()
}

fn sign_and_magnitude(amount: f64) -> (&'static str, f64) {
    if amount < 0.0 {
        ("-", -amount)
    } else {
        ("", amount)
    }
}

/// Symbol followed by the grouped amount, e.g. `$61,245.32`.
pub fn format_currency(amount: f64, code: &str) -> String {
    let symbol = currency_symbol(code);
    let (sign, magnitude) = sign_and_magnitude(amount);
    let body = display_with_max_decimals(magnitude, CURRENCY_MAX_DECIMALS);
    if body == "0" {
        return format!("{symbol}0");
    }
    format!("{sign}{symbol}{body}")
}

/// Compact form with a B/M/K suffix, e.g. `$1.23B`, `€1.50K`, `$999.00`.
///
/// Only the largest matching unit is applied. The unit is chosen on the
/// absolute value; negative amounts carry a leading minus (`-$1.50K`).
pub fn format_compact(amount: f64, code: &str) -> String {
    let symbol = currency_symbol(code);
    let (sign, magnitude) = sign_and_magnitude(amount);

    for (divisor, unit) in COMPACT_UNITS {
        if magnitude >= divisor {
            return format!("{sign}{symbol}{:.2}{unit}", magnitude / divisor);
        }
    }
    format!("{sign}{symbol}{:.2}", magnitude)
}

/// Signed percentage with two decimals: `+2.35%`, `-0.45%`.
pub fn format_percent_change(change: f64) -> String {
    if change >= 0.0 {
        format!("+{:.2}%", change)
    } else {
        format!("{:.2}%", change)
    }
}

/// Unsigned percentage for arrow-style indicators: `2.35%`.
pub fn format_percent_abs(change: f64) -> String {
    format!("{:.2}%", change.abs())
}

/// Like [`format_percent_change`] but renders `N/A` for missing windows.
pub fn format_optional_percent(change: Option<f64>) -> String {
    change
        .map(format_percent_change)
        .unwrap_or_else(|| "N/A".to_string())
}

/// Supply amount followed by the upper-cased ticker: `19,687,500 BTC`.
pub fn format_supply(amount: f64, symbol: &str) -> String {
    format!(
        "{} {}",
        display_with_max_decimals(amount, CURRENCY_MAX_DECIMALS),
        symbol.to_uppercase()
    )
}

/// Grouped amount with exactly two decimals and no symbol, as used on axes.
pub fn format_plain(amount: f64) -> String {
    display_fixed(amount, 2)
}
