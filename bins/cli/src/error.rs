//! CLI error types and exit codes.

use thiserror::Error;

use rentquote_core::pricing::PricingError;

/// Result type alias for the interactive session.
pub type CliResult<T> = Result<T, CliError>;

/// Errors that abort the interactive session.
#[derive(Debug, Error)]
pub enum CliError {
    /// Client name was blank after trimming.
    #[error("Client name cannot be blank.")]
    BlankClientName,

    /// Stdin closed while a prompt was waiting for input.
    #[error("Input stream closed.")]
    InputClosed,

    /// Console I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Pricing rejected the collected inputs.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

impl CliError {
    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::BlankClientName => 1,
            Self::InputClosed | Self::Io(_) | Self::Pricing(_) => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_exits_with_one() {
        assert_eq!(CliError::BlankClientName.exit_code(), 1);
    }

    #[test]
    fn test_other_errors_exit_nonzero() {
        assert_ne!(CliError::InputClosed.exit_code(), 0);
    }
}
