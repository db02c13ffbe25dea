//! # Juros Core
//!
//! Core market conventions for the juros projection library.
//!
//! This crate provides the building blocks the projection engine rests on:
//!
//! - **Types**: the `Date` newtype and `Market` calendar identifiers
//! - **Business Day Calendars**: weekend-only, B3 exchange, and
//!   runtime-loaded holiday calendars
//! - **Withholding**: the regressive IOF schedule for short-horizon
//!   redemptions
//!
//! ## Example
//!
//! ```rust
//! use juros_core::prelude::*;
//!
//! let start = Date::from_ymd(2025, 1, 2)?;
//! let ledger = BvmfCalendar.business_days_after(start, 5)?;
//!
//! assert_eq!(ledger.len(), 5);
//! assert!(ledger.iter().all(|d| BvmfCalendar.is_business_day(*d)));
//! # Ok::<(), juros_core::JurosError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::uninlined_format_args)]

pub mod calendars;
pub mod error;
pub mod tax;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{
        market_calendar, BvmfCalendar, Calendar, CustomCalendar, WeekendCalendar,
    };
    pub use crate::error::{JurosError, JurosResult};
    pub use crate::tax::iof_percent;
    pub use crate::types::{Date, Market};
}

// Re-export commonly used types at crate root
pub use error::{JurosError, JurosResult};
pub use types::{Date, Market};
