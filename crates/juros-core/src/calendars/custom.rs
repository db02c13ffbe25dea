//! Runtime-loaded holiday calendars.
//!
//! A [`CustomCalendar`] layers an explicit holiday set over weekday
//! filtering. Holiday data can come from code, or from a small JSON
//! document:
//!
//! ```json
//! {
//!   "name": "Feriados 2025",
//!   "holidays": ["2025-01-01", "2025-12-25"]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use super::Calendar;
use crate::error::{JurosError, JurosResult};
use crate::types::Date;

/// A holiday calendar built from an explicit set of dates.
///
/// Saturdays and Sundays are always non-business days; every date in the
/// holiday set is as well.
///
/// # Example
///
/// ```rust
/// use juros_core::calendars::{Calendar, CustomCalendar};
/// use juros_core::types::Date;
///
/// let holidays = vec![Date::from_ymd(2025, 1, 1).unwrap()];
/// let cal = CustomCalendar::from_dates("Feriados", holidays);
///
/// assert!(!cal.is_business_day(Date::from_ymd(2025, 1, 1).unwrap()));
/// assert!(cal.is_business_day(Date::from_ymd(2025, 1, 2).unwrap()));
/// ```
#[derive(Debug, Clone)]
pub struct CustomCalendar {
    name: String,
    holidays: HashSet<Date>,
}

impl CustomCalendar {
    /// Creates an empty calendar with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holidays: HashSet::new(),
        }
    }

    /// Creates a calendar from a list of holiday dates.
    #[must_use]
    pub fn from_dates(name: impl Into<String>, holidays: impl IntoIterator<Item = Date>) -> Self {
        Self {
            name: name.into(),
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Loads a calendar from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `JurosError::CalendarError` when the document cannot be
    /// parsed or contains an invalid date.
    pub fn from_json(json: &str) -> JurosResult<Self> {
        let file: CalendarFile =
            serde_json::from_str(json).map_err(|e| JurosError::CalendarError {
                reason: format!("Failed to parse calendar JSON: {e}"),
            })?;

        let mut cal = Self::new(file.name);
        for holiday in &file.holidays {
            let date = Date::parse(holiday).map_err(|_| JurosError::CalendarError {
                reason: format!("Invalid holiday date '{holiday}'"),
            })?;
            cal.add_holiday(date);
        }
        Ok(cal)
    }

    /// Loads a calendar from a JSON file on disk.
    ///
    /// # Errors
    ///
    /// Returns `JurosError::CalendarError` when the file cannot be read or
    /// parsed.
    pub fn from_json_file(path: impl AsRef<Path>) -> JurosResult<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| JurosError::CalendarError {
                reason: format!("Failed to read calendar file: {e}"),
            })?;
        Self::from_json(&content)
    }

    /// Returns the calendar's configured name.
    #[must_use]
    pub fn calendar_name(&self) -> &str {
        &self.name
    }

    /// Adds a holiday date.
    pub fn add_holiday(&mut self, date: Date) {
        self.holidays.insert(date);
    }

    /// Number of holidays in the set.
    #[must_use]
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }
}

impl Calendar for CustomCalendar {
    fn name(&self) -> &'static str {
        // The configured name lives in `calendar_name`; the trait wants a
        // static string.
        "Custom"
    }

    fn is_business_day(&self, date: Date) -> bool {
        date.is_weekday() && !self.holidays.contains(&date)
    }
}

/// JSON document format for loading a calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarFile {
    /// Display name of the calendar.
    pub name: String,

    /// Holiday dates in YYYY-MM-DD format.
    #[serde(default)]
    pub holidays: Vec<String>,
}
