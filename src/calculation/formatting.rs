//! Display formatting for amounts and rates.
//!
//! Amounts are kept exact everywhere else; these helpers are the only place
//! rounding happens, and only for human-readable labels.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount with comma thousands separators and two decimals.
///
/// Halves round to even.
///
/// # Examples
///
/// ```
/// use tax_engine::calculation::format_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_amount(Decimal::from(1_400_000)), "1,400,000.00");
/// assert_eq!(format_amount(Decimal::new(12345, 3)), "12.34");
/// ```
pub fn format_amount(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    let text = format!("{:.2}", rounded.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(text.len() + whole.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        grouped.push('-');
    }
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.push('.');
    grouped.push_str(fraction);
    grouped
}

/// Formats a fractional rate as a whole percentage, e.g. `0.15` as `"15%"`.
pub fn format_percent(rate: Decimal) -> String {
    let percent = (rate * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
        .normalize();
    format!("{}%", percent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(dec("800000")), "800,000.00");
        assert_eq!(format_amount(dec("2800000")), "2,800,000.00");
        assert_eq!(format_amount(dec("1234567890.5")), "1,234,567,890.50");
    }

    #[test]
    fn test_format_amount_small_values() {
        assert_eq!(format_amount(Decimal::ZERO), "0.00");
        assert_eq!(format_amount(dec("7")), "7.00");
        assert_eq!(format_amount(dec("999.999")), "1,000.00");
        assert_eq!(format_amount(dec("100")), "100.00");
    }

    #[test]
    fn test_format_amount_rounds_half_to_even() {
        assert_eq!(format_amount(dec("0.125")), "0.12");
        assert_eq!(format_amount(dec("0.135")), "0.14");
    }

    #[test]
    fn test_format_amount_negative() {
        assert_eq!(format_amount(dec("-1500")), "-1,500.00");
        assert_eq!(format_amount(dec("-0.001")), "0.00");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(Decimal::ZERO), "0%");
        assert_eq!(format_percent(dec("0.00")), "0%");
        assert_eq!(format_percent(dec("0.15")), "15%");
        assert_eq!(format_percent(dec("0.30")), "30%");
        assert_eq!(format_percent(dec("0.04")), "4%");
        assert_eq!(format_percent(Decimal::ONE), "100%");
    }
}
