//! Schedule export error types.

use thiserror::Error;

/// Errors from writing the schedule file.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV encoding or write failure.
    #[error("Failed to write schedule: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
