//! Number formatting for report output

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Round half away from zero, the convention for printed figures
fn round_for_display(value: Decimal, decimals: u32) -> Decimal {
    value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
}

/// Format with thousands separators and a fixed number of decimals
///
/// `1234567.891` at 1 dp becomes `1,234,567.9`.
pub fn group_thousands(value: Decimal, decimals: u32) -> String {
    let rounded = round_for_display(value, decimals);
    let text = format!("{:.*}", decimals as usize, rounded.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(text.len() + int_part.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        grouped.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

/// Amount in millions, e.g. `$45,000.0M`
pub fn millions(value: Decimal) -> String {
    with_currency(group_thousands(value, 1), "M")
}

/// Per-share amount, e.g. `$150.34`
pub fn per_share(value: Decimal) -> String {
    with_currency(group_thousands(value, 2), "")
}

/// Decimal rate as a percentage, e.g. `0.025` -> `2.5%`
///
/// Rates too large to scale by 100 are shown as the raw decimal.
pub fn percent(rate: Decimal) -> String {
    match rate.checked_mul(dec!(100)) {
        Some(pct) => format!("{:.1}%", round_for_display(pct, 1)),
        None => format!("{} (decimal)", rate),
    }
}

fn with_currency(amount: String, suffix: &str) -> String {
    match amount.strip_prefix('-') {
        Some(abs) => format!("-${}{}", abs, suffix),
        None => format!("${}{}", amount, suffix),
    }
}
