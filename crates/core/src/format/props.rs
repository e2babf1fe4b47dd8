//! Property-based tests for formatting.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::currency::format_currency;
use super::name::sanitize_name;

/// Strategy to generate scale-2 amounts up to ten million.
fn any_amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Sanitization is idempotent and never yields an empty fragment.
    #[test]
    fn prop_sanitize_is_idempotent(raw in ".*") {
        let once = sanitize_name(&raw);
        let twice = sanitize_name(&once);
        prop_assert!(!once.is_empty());
        prop_assert_eq!(once, twice);
    }

    /// Sanitized output stays within the safe character set.
    #[test]
    fn prop_sanitize_output_is_filesystem_safe(raw in ".*") {
        for c in sanitize_name(&raw).chars() {
            prop_assert!(
                c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-',
                "unexpected character {c:?}"
            );
        }
    }

    /// Currency strings always carry the symbol and exactly two decimals.
    #[test]
    fn prop_currency_format_shape(amount in any_amount()) {
        let rendered = format_currency(amount);
        prop_assert!(rendered.starts_with("R$ "));

        let decimals = rendered.rsplit(',').next().unwrap_or_default();
        prop_assert_eq!(decimals.len(), 2);
        prop_assert!(decimals.chars().all(|c| c.is_ascii_digit()));
    }
}
