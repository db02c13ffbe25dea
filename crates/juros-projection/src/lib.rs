//! # Juros Projection
//!
//! Day-by-day net-yield projection comparing a CDB against a compromissada
//! over short business-day horizons.
//!
//! The engine derives the CDI daily rate from the annual Selic reference,
//! walks a business-day calendar, and emits one [`ProjectionRow`] per
//! business day: both instruments' net values after IOF withholding and
//! income tax, plus the compromissada's return as a percentage of the
//! CDB's.
//!
//! ## Example
//!
//! ```rust
//! use juros_core::prelude::*;
//! use juros_projection::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let params = ProjectionParameters {
//!     start_date: Date::from_ymd(2025, 1, 2)?,
//!     principal: dec!(10000),
//!     selic_annual: dec!(0.15),
//!     cdb_fraction: dec!(1.0),
//!     compromissada_fraction: dec!(0.5),
//!     horizon_business_days: 22,
//! };
//!
//! let projection = project(&params, &BvmfCalendar)?;
//! assert_eq!(projection.rows().len(), 22);
//! # Ok::<(), Box<dyn std::error::Error>>(())
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
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod projection;
pub mod rates;
pub mod yields;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ProjectionError, ProjectionResult};
    pub use crate::projection::{
        project, Projection, ProjectionParameters, ProjectionRow, MAX_HORIZON_DAYS,
        MIN_HORIZON_DAYS,
    };
    pub use crate::rates::{cdi_daily_rate, BUSINESS_DAYS_PER_YEAR, CDI_SELIC_SPREAD};
}

// Re-export commonly used types at crate root
pub use error::{ProjectionError, ProjectionResult};
pub use projection::{
    project, Projection, ProjectionParameters, ProjectionRow, MAX_HORIZON_DAYS, MIN_HORIZON_DAYS,
};
