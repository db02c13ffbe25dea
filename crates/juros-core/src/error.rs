//! Error types for the juros core library.
//!
//! This module defines the error type shared by date handling and
//! calendar generation, with context on each failure.

use thiserror::Error;

/// A specialized Result type for juros core operations.
pub type JurosResult<T> = Result<T, JurosError>;

/// The main error type for juros core operations.
#[derive(Error, Debug, Clone)]
pub enum JurosError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Calendar or business day error.
    #[error("Calendar error: {reason}")]
    CalendarError {
        /// Description of the error.
        reason: String,
    },

    /// Business-day scan gave up before reaching the requested count.
    #[error("Calendar exhausted after {found} of {requested} business days from {start}")]
    CalendarExhausted {
        /// Start date of the scan (ISO format).
        start: String,
        /// Business days found before the scan gave up.
        found: u32,
        /// Business days requested.
        requested: u32,
    },

    /// Market code with no registered calendar.
    #[error("Unknown market: {code}")]
    UnknownMarket {
        /// The unrecognized market code.
        code: String,
    },
}

impl JurosError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates a calendar error.
    #[must_use]
    pub fn calendar_error(reason: impl Into<String>) -> Self {
        Self::CalendarError {
            reason: reason.into(),
        }
    }

    /// Creates a calendar exhausted error.
    #[must_use]
    pub fn calendar_exhausted(start: impl Into<String>, found: u32, requested: u32) -> Self {
        Self::CalendarExhausted {
            start: start.into(),
            found,
            requested,
        }
    }

    /// Creates an unknown market error.
    #[must_use]
    pub fn unknown_market(code: impl Into<String>) -> Self {
        Self::UnknownMarket { code: code.into() }
    }
}
