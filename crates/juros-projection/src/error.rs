//! Error types for the projection engine.

use juros_core::JurosError;
use thiserror::Error;

/// Error type for projection operations.
#[derive(Debug, Error)]
pub enum ProjectionError {
    /// Invalid input parameter.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Projection horizon outside the supported range.
    #[error("horizon of {requested} business days is out of bounds [{min}, {max}]")]
    HorizonOutOfBounds {
        /// The horizon that was requested.
        requested: u32,
        /// Minimum supported horizon.
        min: u32,
        /// Maximum supported horizon.
        max: u32,
    },

    /// Calendar failure while generating ledger dates.
    #[error("calendar error: {0}")]
    Calendar(String),
}

/// Result type alias for projection operations.
pub type ProjectionResult<T> = Result<T, ProjectionError>;

impl From<JurosError> for ProjectionError {
    fn from(err: JurosError) -> Self {
        ProjectionError::Calendar(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProjectionError::HorizonOutOfBounds {
            requested: 45,
            min: 1,
            max: 30,
        };
        assert!(err.to_string().contains("45"));
        assert!(err.to_string().contains("[1, 30]"));
    }

    #[test]
    fn test_calendar_error_conversion() {
        let core_err = JurosError::calendar_exhausted("2025-01-02", 0, 5);
        let err: ProjectionError = core_err.into();
        assert!(matches!(err, ProjectionError::Calendar(_)));
        assert!(err.to_string().contains("2025-01-02"));
    }
}
