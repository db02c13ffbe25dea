//! Market identifier for holiday-calendar selection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies the holiday-calendar source for a market.
///
/// The projection engine only needs to know which market's holidays apply;
/// the code resolves to a [`Calendar`](crate::calendars::Calendar) through
/// [`market_calendar`](crate::calendars::market_calendar).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Market(String);

impl Market {
    /// B3 exchange (Brasil, Bolsa, Balcão) financial calendar.
    pub const BVMF: &'static str = "BVMF";
    /// Weekend-only calendar with no holiday data.
    pub const WEEKEND: &'static str = "WEEKEND";

    /// Creates a new market identifier. Codes are case-insensitive.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    /// Returns the market code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    // Convenience constructors

    /// B3 exchange calendar.
    #[must_use]
    pub fn bvmf() -> Self {
        Self::new(Self::BVMF)
    }

    /// Weekend-only calendar.
    #[must_use]
    pub fn weekend_only() -> Self {
        Self::new(Self::WEEKEND)
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Market {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}
