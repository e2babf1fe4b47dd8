//! Schedule data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One month of the payment schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Month index, 1-12.
    pub month: u32,
    /// Monthly rent, constant across all rows.
    pub monthly_rent: Decimal,
    /// Contract installment; nonzero only in the first N months.
    pub contract_installment: Decimal,
    /// Rent plus installment for the month.
    pub total_for_month: Decimal,
}
