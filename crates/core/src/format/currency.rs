//! Currency display formatting.
//!
//! Renders amounts in the agency's display convention: "R$" symbol, period
//! as the thousands separator, comma as the decimal separator. This is a
//! display concern only; calculations and file exports never use it.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats a monetary value as `R$ 1.234,56`.
///
/// The value is rounded to two decimal places with Banker's Rounding at
/// this boundary; intermediate calculations stay at full precision.
#[must_use]
pub fn format_currency(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let digits = int_part.as_bytes();
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(char::from(*digit));
    }

    format!("R$ {sign}{grouped},{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_zero() {
        assert_eq!(format_currency(dec!(0)), "R$ 0,00");
    }

    #[test]
    fn test_format_pads_two_decimals() {
        assert_eq!(format_currency(dec!(900)), "R$ 900,00");
        assert_eq!(format_currency(dec!(12.5)), "R$ 12,50");
    }

    #[test]
    fn test_format_swaps_separators() {
        assert_eq!(format_currency(dec!(1234.56)), "R$ 1.234,56");
        assert_eq!(format_currency(dec!(1140.00)), "R$ 1.140,00");
    }

    #[test]
    fn test_format_groups_millions() {
        assert_eq!(format_currency(dec!(1000000.5)), "R$ 1.000.000,50");
        assert_eq!(format_currency(dec!(123456789.01)), "R$ 123.456.789,01");
    }

    #[test]
    fn test_format_rounds_at_display() {
        assert_eq!(format_currency(dec!(666.666666)), "R$ 666,67");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_currency(dec!(-1234.5)), "R$ -1.234,50");
    }
}
