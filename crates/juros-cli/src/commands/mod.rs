//! CLI command implementations.

pub mod calendar;
pub mod compare;

// Re-export argument structs for convenience
pub use calendar::CalendarArgs;
pub use compare::CompareArgs;

use std::path::Path;

use juros_core::calendars::{market_calendar, Calendar, CustomCalendar};
use juros_core::types::{Date, Market};
use juros_projection::{MAX_HORIZON_DAYS, MIN_HORIZON_DAYS};

use crate::error::{CliError, CliResult};

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Resolves an optional date argument, defaulting to today.
pub fn resolve_start_date(arg: Option<&str>) -> CliResult<Date> {
    match arg {
        Some(s) => parse_date(s),
        None => Ok(Date::today()),
    }
}

/// Validates a principal amount.
pub fn validate_principal(principal: f64) -> CliResult<f64> {
    if !principal.is_finite() || principal <= 0.0 {
        return Err(CliError::InvalidPrincipal(principal));
    }
    Ok(principal)
}

/// Validates an annual rate given as a percentage.
pub fn validate_rate(rate: f64) -> CliResult<f64> {
    if !(0.0..=100.0).contains(&rate) {
        return Err(CliError::InvalidRate(rate));
    }
    Ok(rate)
}

/// Validates a CDI percentage (110 means 110% of CDI).
pub fn validate_fraction(fraction: f64) -> CliResult<f64> {
    if !(0.0..=500.0).contains(&fraction) {
        return Err(CliError::InvalidFraction(fraction));
    }
    Ok(fraction)
}

/// Validates a projection horizon.
pub fn validate_horizon(days: u32) -> CliResult<u32> {
    if !(MIN_HORIZON_DAYS..=MAX_HORIZON_DAYS).contains(&days) {
        return Err(CliError::InvalidHorizon(days));
    }
    Ok(days)
}

/// Calendar chosen for a run: a built-in market or one loaded from a file.
pub enum ResolvedCalendar {
    Builtin(&'static dyn Calendar),
    Custom(CustomCalendar),
}

impl ResolvedCalendar {
    /// Borrows the calendar as a trait object.
    pub fn as_dyn(&self) -> &dyn Calendar {
        match self {
            ResolvedCalendar::Builtin(c) => *c,
            ResolvedCalendar::Custom(c) => c,
        }
    }
}

/// Resolves the run calendar. A holidays file wins over the market code.
pub fn resolve_calendar(
    market: &str,
    holidays_file: Option<&Path>,
) -> CliResult<ResolvedCalendar> {
    if let Some(path) = holidays_file {
        let calendar = CustomCalendar::from_json_file(path)?;
        tracing::debug!(
            name = calendar.calendar_name(),
            holidays = calendar.holiday_count(),
            "loaded calendar file"
        );
        return Ok(ResolvedCalendar::Custom(calendar));
    }

    let market = Market::new(market);
    Ok(ResolvedCalendar::Builtin(market_calendar(&market)?))
}
