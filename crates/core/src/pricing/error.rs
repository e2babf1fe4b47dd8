//! Pricing error types.

use thiserror::Error;

/// Pricing-related errors.
#[derive(Debug, Error)]
pub enum PricingError {
    /// Property type token not recognized.
    #[error("Invalid property type: {0}")]
    InvalidPropertyType(String),

    /// Installment count outside the allowed range.
    #[error("Contract installments must be between {min} and {max}, got {got}")]
    InvalidInstallmentCount {
        /// Minimum allowed installments.
        min: u8,
        /// Maximum allowed installments.
        max: u8,
        /// The rejected value.
        got: u8,
    },
}
