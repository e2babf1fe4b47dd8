//! Schedule construction.

use rust_decimal::Decimal;

use super::types::ScheduleRow;

/// Number of months covered by every schedule.
pub const SCHEDULE_MONTHS: u32 = 12;

/// Builds the 12-row payment schedule.
///
/// Month `m` carries the contract installment while `m <= num_installments`;
/// later months carry zero. The total is always rent plus installment.
#[must_use]
pub fn build_schedule(
    monthly_rent: Decimal,
    installment_amount: Decimal,
    num_installments: u8,
) -> Vec<ScheduleRow> {
    (1..=SCHEDULE_MONTHS)
        .map(|month| {
            let contract_installment = if month <= u32::from(num_installments) {
                installment_amount
            } else {
                Decimal::ZERO
            };
            ScheduleRow {
                month,
                monthly_rent,
                contract_installment,
                total_for_month: monthly_rent + contract_installment,
            }
        })
        .collect()
}
