//! Pricing data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::PricingError;

/// Property type offered by the agency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    /// Apartment unit.
    Apartment,
    /// Detached house.
    House,
    /// Studio unit.
    Studio,
}

/// Type-specific inputs for a quote.
///
/// Exactly one shape is meaningful per property type: apartments and houses
/// carry a room count and garage flag, studios carry a parking-slot count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyDetails {
    /// Apartment or house inputs.
    Residence {
        /// Number of rooms (1 or 2).
        rooms: u8,
        /// Whether a garage space is included.
        has_garage: bool,
    },
    /// Studio inputs.
    Studio {
        /// Number of requested parking slots.
        parking_slots: u32,
    },
}

/// A complete rental quote. Derived per run, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    /// Client display name, as entered.
    pub client_name: String,
    /// Property type.
    pub property_type: PropertyType,
    /// Type-specific details.
    pub details: PropertyDetails,
    /// Whether the client has children.
    pub has_children: bool,
    /// Monthly rent after surcharges and discount.
    pub monthly_rent: Decimal,
    /// Fixed one-time contract fee.
    pub contract_fee: Decimal,
    /// Number of contract installments (1-5).
    pub num_installments: u8,
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Apartment => write!(f, "Apartment"),
            Self::House => write!(f, "House"),
            Self::Studio => write!(f, "Studio"),
        }
    }
}

impl std::str::FromStr for PropertyType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "apartment" => Ok(Self::Apartment),
            "house" => Ok(Self::House),
            "studio" => Ok(Self::Studio),
            other => Err(PricingError::InvalidPropertyType(other.to_string())),
        }
    }
}
