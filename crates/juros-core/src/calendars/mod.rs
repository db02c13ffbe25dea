//! Business day calendars.
//!
//! This module provides:
//! - The [`Calendar`] trait with the forward business-day generator
//! - Market calendars (weekend-only, B3 exchange)
//! - Runtime-loaded holiday calendars
//! - A registry resolving [`Market`] codes to calendars

mod bvmf;
mod custom;

pub use bvmf::{easter_sunday, BvmfCalendar};
pub use custom::{CalendarFile, CustomCalendar};

use crate::error::{JurosError, JurosResult};
use crate::types::{Date, Market};

/// Longest run of consecutive non-business days the forward scan tolerates
/// before giving up. No real market closes for a full year.
pub const MAX_SCAN_GAP_DAYS: u32 = 366;

/// Trait for business day calendars.
///
/// Calendars determine which days are business days vs holidays
/// for a specific market or jurisdiction.
pub trait Calendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &'static str;

    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> bool;

    /// Returns true if the date is a holiday.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Generates the next `count` business days strictly after `start`.
    ///
    /// The start date itself is never included, even when it is a business
    /// day. Returned dates are strictly increasing; each is a weekday and
    /// not a holiday of this calendar. The scan walks one calendar day at a
    /// time and fails with [`JurosError::CalendarExhausted`] once
    /// [`MAX_SCAN_GAP_DAYS`] consecutive non-business days go by without
    /// finding the next date, so a degenerate calendar cannot hang it.
    fn business_days_after(&self, start: Date, count: u32) -> JurosResult<Vec<Date>> {
        let mut dates = Vec::with_capacity(count as usize);
        let mut current = start;
        let mut gap: u32 = 0;

        while (dates.len() as u32) < count {
            current = current.add_days(1);
            if self.is_business_day(current) {
                gap = 0;
                dates.push(current);
            } else {
                gap += 1;
                if gap >= MAX_SCAN_GAP_DAYS {
                    return Err(JurosError::calendar_exhausted(
                        start.to_string(),
                        dates.len() as u32,
                        count,
                    ));
                }
            }
        }

        Ok(dates)
    }
}

/// A simple weekend-only calendar (no holidays).
///
/// Useful for testing or when holiday data is not available.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendCalendar;

impl Calendar for WeekendCalendar {
    fn name(&self) -> &'static str {
        "Weekend Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        date.is_weekday()
    }
}

/// Resolves a market code to its registered calendar.
///
/// # Errors
///
/// Returns `JurosError::UnknownMarket` when no calendar is registered for
/// the code.
pub fn market_calendar(market: &Market) -> JurosResult<&'static dyn Calendar> {
    match market.as_str() {
        Market::BVMF | "B3" => Ok(&BvmfCalendar),
        Market::WEEKEND => Ok(&WeekendCalendar),
        other => Err(JurosError::unknown_market(other)),
    }
}
