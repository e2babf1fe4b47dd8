//! Property-based tests for pricing.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::config::PricingConfig;
use super::service::PricingService;
use super::types::{PropertyDetails, PropertyType};

/// Strategy to generate any property type.
fn any_property_type() -> impl Strategy<Value = PropertyType> {
    prop_oneof![
        Just(PropertyType::Apartment),
        Just(PropertyType::House),
        Just(PropertyType::Studio),
    ]
}

/// Strategy to generate any shape of details, matched or not.
fn any_details() -> impl Strategy<Value = PropertyDetails> {
    prop_oneof![
        (1u8..=2, any::<bool>()).prop_map(|(rooms, has_garage)| PropertyDetails::Residence {
            rooms,
            has_garage,
        }),
        (0u32..100).prop_map(|parking_slots| PropertyDetails::Studio { parking_slots }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Surcharges only ever add to the base value.
    #[test]
    fn prop_adjusted_value_never_below_base(
        property_type in any_property_type(),
        details in any_details(),
    ) {
        let config = PricingConfig::default();
        let base = PricingService::base_value(&config, property_type);
        let adjusted = PricingService::apply_rooms_and_extras(&config, property_type, &details);
        prop_assert!(adjusted >= base);
    }

    /// The discount never increases a value and never drives it negative.
    #[test]
    fn prop_rent_is_never_negative(
        property_type in any_property_type(),
        details in any_details(),
        has_children in any::<bool>(),
    ) {
        let config = PricingConfig::default();
        let adjusted = PricingService::apply_rooms_and_extras(&config, property_type, &details);
        let rent = PricingService::apply_discount(&config, property_type, adjusted, has_children);
        prop_assert!(rent <= adjusted);
        prop_assert!(rent >= Decimal::ZERO);
    }

    /// Pricing is deterministic: same inputs, same rent.
    #[test]
    fn prop_pricing_is_deterministic(
        property_type in any_property_type(),
        details in any_details(),
        has_children in any::<bool>(),
    ) {
        let config = PricingConfig::default();
        let first = PricingService::apply_discount(
            &config,
            property_type,
            PricingService::apply_rooms_and_extras(&config, property_type, &details),
            has_children,
        );
        let second = PricingService::apply_discount(
            &config,
            property_type,
            PricingService::apply_rooms_and_extras(&config, property_type, &details),
            has_children,
        );
        prop_assert_eq!(first, second);
    }

    /// Installments always multiply back to the contract fee at 2 decimals.
    #[test]
    fn prop_installments_restore_contract_fee(count in 1u8..=5) {
        let config = PricingConfig::default();
        let amount = PricingService::contract_installment_amount(&config, count).unwrap();
        let total = (amount * Decimal::from(count)).round_dp(2);
        prop_assert_eq!(total, config.contract_fee);
    }
}
