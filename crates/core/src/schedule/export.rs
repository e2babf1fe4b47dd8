//! CSV export of the payment schedule.
//!
//! The export uses the plain decimal-point convention with exactly two
//! decimal places per numeric field; the localized display format never
//! reaches the file.

use std::path::Path;

use chrono::{DateTime, Local};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::info;

use crate::format::sanitize_name;

use super::error::ExportError;
use super::types::ScheduleRow;

/// Column headers of the exported file.
const HEADER: [&str; 4] = [
    "month",
    "monthly_rent",
    "contract_installment",
    "total_for_month",
];

/// Builds the export file name: `orcamento_<sanitized-name>_<timestamp>.csv`.
#[must_use]
pub fn export_file_name(client_name: &str, at: DateTime<Local>) -> String {
    format!(
        "orcamento_{}_{}.csv",
        sanitize_name(client_name),
        at.format("%Y%m%d%H%M%S")
    )
}

/// Writes the schedule as a comma-separated UTF-8 file.
///
/// The writer is flushed before returning; a failure on any path surfaces
/// as `ExportError` and leaves no open handle behind.
///
/// # Errors
///
/// Returns `ExportError` when the path cannot be created or written.
pub fn export_to_file(schedule: &[ScheduleRow], path: &Path) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(HEADER)?;
    for row in schedule {
        writer.write_record([
            row.month.to_string(),
            plain_two_decimals(row.monthly_rent),
            plain_two_decimals(row.contract_installment),
            plain_two_decimals(row.total_for_month),
        ])?;
    }
    writer.flush()?;

    info!(path = %path.display(), rows = schedule.len(), "Schedule exported");
    Ok(())
}

/// Renders a value with exactly two decimal places and a plain decimal point.
fn plain_two_decimals(value: Decimal) -> String {
    format!(
        "{:.2}",
        value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
    )
}
