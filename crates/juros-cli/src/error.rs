//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date format: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// Invalid principal.
    #[error("Invalid principal: {0}. Must be positive.")]
    InvalidPrincipal(f64),

    /// Invalid annual rate.
    #[error("Invalid annual rate: {0}. Must be between 0 and 100.")]
    InvalidRate(f64),

    /// Invalid CDI percentage.
    #[error("Invalid CDI percentage: {0}. Must be between 0 and 500.")]
    InvalidFraction(f64),

    /// Invalid projection horizon.
    #[error("Invalid horizon: {0}. Must be between 1 and 30 business days.")]
    InvalidHorizon(u32),

    /// Calendar error.
    #[error("Calendar error: {0}")]
    Calendar(#[from] juros_core::error::JurosError),

    /// Projection error.
    #[error("Projection error: {0}")]
    Projection(#[from] juros_projection::error::ProjectionError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
