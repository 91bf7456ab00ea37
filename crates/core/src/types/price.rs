//! Display formatting for Turkish Lira amounts.
//!
//! Catalog prices are whole-unit lira. Display formatting rounds to whole
//! units (half away from zero) and inserts `.` grouping separators, matching
//! the `tr-TR` locale; the underlying [`Decimal`] amount is never rounded
//! internally.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Turkish Lira currency symbol.
pub const LIRA_SYMBOL: &str = "\u{20ba}";

/// ISO 4217 currency code used across the storefront.
pub const CURRENCY_CODE: &str = "TRY";

/// Format an amount as whole-unit Turkish Lira, e.g. `₺25.000`.
///
/// Negative amounts keep their sign ahead of the symbol (`-₺100`); they do
/// not occur in catalog data but the formatter does not assume that.
#[must_use]
pub fn format_lira(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let units = rounded.to_i64().unwrap_or(0);
    let grouped = group_thousands(units.unsigned_abs());

    if units < 0 {
        format!("-{LIRA_SYMBOL}{grouped}")
    } else {
        format!("{LIRA_SYMBOL}{grouped}")
    }
}

/// Insert `.` separators every three digits, right to left.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            out.push('.');
        }
        out.push(c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_lira_grouping() {
        assert_eq!(format_lira(Decimal::from(25_000)), "₺25.000");
        assert_eq!(format_lira(Decimal::from(1_500_000)), "₺1.500.000");
        assert_eq!(format_lira(Decimal::from(500)), "₺500");
        assert_eq!(format_lira(Decimal::from(0)), "₺0");
    }

    #[test]
    fn test_format_lira_rounds_display_only() {
        // 2500.75 displays as 2501; fractional amounts never survive display
        assert_eq!(format_lira(Decimal::new(250_075, 2)), "₺2.501");
        assert_eq!(format_lira(Decimal::new(250_040, 2)), "₺2.500");
    }

    #[test]
    fn test_format_lira_midpoint_away_from_zero() {
        assert_eq!(format_lira(Decimal::new(5, 1)), "₺1");
        assert_eq!(format_lira(Decimal::new(-5, 1)), "-₺1");
    }

    #[test]
    fn test_format_lira_negative() {
        assert_eq!(format_lira(Decimal::from(-12_345)), "-₺12.345");
    }
}
