//! Pricing configuration.
//!
//! All monetary constants live here as an immutable structure passed
//! explicitly into the pricing functions. `Default` carries the agency's
//! current price table.

use rust_decimal::Decimal;

/// Immutable price table for rental quotes.
#[derive(Debug, Clone)]
pub struct PricingConfig {
    /// Base monthly rent for an apartment.
    pub apartment_base: Decimal,
    /// Base monthly rent for a house.
    pub house_base: Decimal,
    /// Base monthly rent for a studio.
    pub studio_base: Decimal,
    /// Surcharge for a second room in an apartment.
    pub apartment_second_room: Decimal,
    /// Surcharge for a second room in a house.
    pub house_second_room: Decimal,
    /// Surcharge for a garage space (apartments and houses).
    pub garage: Decimal,
    /// Flat surcharge covering the first two studio parking slots.
    pub studio_parking_base: Decimal,
    /// Surcharge per studio parking slot beyond the second.
    pub studio_extra_slot: Decimal,
    /// Discount fraction for apartment clients without children.
    pub no_children_discount: Decimal,
    /// Fixed one-time contract fee.
    pub contract_fee: Decimal,
    /// Minimum number of contract installments.
    pub min_installments: u8,
    /// Maximum number of contract installments.
    pub max_installments: u8,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            apartment_base: Decimal::new(70_000, 2),
            house_base: Decimal::new(90_000, 2),
            studio_base: Decimal::new(120_000, 2),
            apartment_second_room: Decimal::new(20_000, 2),
            house_second_room: Decimal::new(25_000, 2),
            garage: Decimal::new(30_000, 2),
            studio_parking_base: Decimal::new(25_000, 2),
            studio_extra_slot: Decimal::new(6_000, 2),
            no_children_discount: Decimal::new(5, 2),
            contract_fee: Decimal::new(200_000, 2),
            min_installments: 1,
            max_installments: 5,
        }
    }
}
