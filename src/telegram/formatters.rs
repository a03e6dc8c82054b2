//! Reply text formatters.

use num_format::{Locale, ToFormattedString};

/// Format a USD amount as `$1,234,567.89`: thousands-grouped, exactly two
/// decimals. Non-finite values render as the literal `N/A`.
pub fn format_usd(value: f64) -> String {
    if !value.is_finite() {
        return "N/A".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    // Work in cents so rounding carries into the integer part.
    let total_cents = (value.abs() * 100.0).round() as u128;
    let dollars = total_cents / 100;
    let cents = (total_cents % 100) as u8;

    format!(
        "{}${}.{:02}",
        sign,
        dollars.to_formatted_string(&Locale::en),
        cents
    )
}

/// Format a ratio as a percentage with two decimals (`1.0` -> `100.00%`).
/// Non-finite values render as `N/A`.
pub fn format_pct(value: f64) -> String {
    if !value.is_finite() {
        return "N/A".to_string();
    }

    format!("{:.2}%", value * 100.0)
}
