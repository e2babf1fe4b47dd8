//! Pricing service for rent and contract calculations.
//!
//! All functions take the price table explicitly so tests can inject their
//! own values. Results are returned at full precision; rounding to two
//! decimal places happens only at display and export boundaries.

use rust_decimal::Decimal;

use super::config::PricingConfig;
use super::error::PricingError;
use super::types::{PropertyDetails, PropertyType, Quote};

/// Pricing service for business logic.
pub struct PricingService;

impl PricingService {
    /// Base monthly rent for a property type, before any adjustment.
    #[must_use]
    pub fn base_value(config: &PricingConfig, property_type: PropertyType) -> Decimal {
        match property_type {
            PropertyType::Apartment => config.apartment_base,
            PropertyType::House => config.house_base,
            PropertyType::Studio => config.studio_base,
        }
    }

    /// Applies room, garage, and parking surcharges on top of the base value.
    ///
    /// - Apartment with 2 rooms: second-room surcharge; house likewise with
    ///   its own rate. One room adds nothing.
    /// - Apartment or house with a garage: garage surcharge, independent of
    ///   the room surcharge.
    /// - Studio: no charge for zero slots, a flat rate covering the first two
    ///   slots, plus a per-slot rate for every slot beyond the second.
    ///
    /// Details that do not match the property type add nothing.
    #[must_use]
    pub fn apply_rooms_and_extras(
        config: &PricingConfig,
        property_type: PropertyType,
        details: &PropertyDetails,
    ) -> Decimal {
        let mut value = Self::base_value(config, property_type);

        match (property_type, *details) {
            (PropertyType::Apartment, PropertyDetails::Residence { rooms, has_garage }) => {
                if rooms == 2 {
                    value += config.apartment_second_room;
                }
                if has_garage {
                    value += config.garage;
                }
            }
            (PropertyType::House, PropertyDetails::Residence { rooms, has_garage }) => {
                if rooms == 2 {
                    value += config.house_second_room;
                }
                if has_garage {
                    value += config.garage;
                }
            }
            (PropertyType::Studio, PropertyDetails::Studio { parking_slots }) => {
                if parking_slots > 0 {
                    value += config.studio_parking_base;
                    if parking_slots > 2 {
                        value += config.studio_extra_slot * Decimal::from(parking_slots - 2);
                    }
                }
            }
            _ => {}
        }

        value
    }

    /// Applies the no-children apartment discount to a post-surcharge value.
    ///
    /// The discount is always computed on the adjusted total, never the base.
    #[must_use]
    pub fn apply_discount(
        config: &PricingConfig,
        property_type: PropertyType,
        value: Decimal,
        has_children: bool,
    ) -> Decimal {
        if property_type == PropertyType::Apartment && !has_children {
            value * (Decimal::ONE - config.no_children_discount)
        } else {
            value
        }
    }

    /// Splits the fixed contract fee evenly across `num_installments`.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidInstallmentCount` when the count falls
    /// outside the configured range.
    pub fn contract_installment_amount(
        config: &PricingConfig,
        num_installments: u8,
    ) -> Result<Decimal, PricingError> {
        if !(config.min_installments..=config.max_installments).contains(&num_installments) {
            return Err(PricingError::InvalidInstallmentCount {
                min: config.min_installments,
                max: config.max_installments,
                got: num_installments,
            });
        }

        Ok(config.contract_fee / Decimal::from(num_installments))
    }

    /// Builds a complete quote: base value, surcharges, then discount.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidInstallmentCount` when the installment
    /// count falls outside the configured range.
    pub fn quote(
        config: &PricingConfig,
        client_name: String,
        property_type: PropertyType,
        details: PropertyDetails,
        has_children: bool,
        num_installments: u8,
    ) -> Result<Quote, PricingError> {
        if !(config.min_installments..=config.max_installments).contains(&num_installments) {
            return Err(PricingError::InvalidInstallmentCount {
                min: config.min_installments,
                max: config.max_installments,
                got: num_installments,
            });
        }

        let adjusted = Self::apply_rooms_and_extras(config, property_type, &details);
        let monthly_rent = Self::apply_discount(config, property_type, adjusted, has_children);

        Ok(Quote {
            client_name,
            property_type,
            details,
            has_children,
            monthly_rent,
            contract_fee: config.contract_fee,
            num_installments,
        })
    }
}
