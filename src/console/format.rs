use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

pub(crate) const CURRENCY: &str = "R";

/// Format an amount with the currency symbol and 2 decimal places, halves
/// rounded away from zero.
/// e.g. `1000` → `"R1000.00"`, `-42.5` → `"-R42.50"`, `2.665` → `"R2.67"`
pub(crate) fn format_amount(val: Decimal) -> String {
    let abs = val
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if val < Decimal::ZERO && !abs.is_zero() {
        format!("-{CURRENCY}{abs:.2}")
    } else {
        format!("{CURRENCY}{abs:.2}")
    }
}

/// Format a percentage to one decimal place, e.g. `"100.0%"`.
pub(crate) fn format_percent(val: Decimal) -> String {
    format!(
        "{:.1}%",
        val.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Parse an amount as typed by the user. Plain decimals and exponent form
/// are accepted; sign is not checked.
pub(crate) fn parse_amount(input: &str) -> Option<Decimal> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

/// Truncate a string to `max` visible characters, appending "…" if truncated.
/// The result is guaranteed to be at most `max` characters (counting "…" as one).
/// Safe for multi-byte UTF-8 characters.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let char_count = s.chars().count();
    if char_count <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{truncated}…")
}
