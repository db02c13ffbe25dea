//! Reference-rate conventions for the Brazilian interbank market.
//!
//! The CDI (interbank deposit) rate trades a fixed 10 basis points under
//! the Selic target; daily compounding uses the B3 convention of a
//! 252-business-day year.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{ProjectionError, ProjectionResult};

/// Business days in the Brazilian compounding year.
pub const BUSINESS_DAYS_PER_YEAR: u32 = 252;

/// Fixed spread between the Selic target and the CDI rate, as a fraction.
pub const CDI_SELIC_SPREAD: Decimal = dec!(0.001);

/// Effective annual CDI rate implied by an annual Selic rate.
#[must_use]
pub fn cdi_annual_rate(selic_annual: Decimal) -> Decimal {
    selic_annual - CDI_SELIC_SPREAD
}

/// Daily compounding rate for an effective annual rate over the
/// 252-business-day year.
///
/// # Formula
///
/// ```text
/// daily = (1 + annual)^(1/252) - 1
/// ```
///
/// The fractional root goes through f64; the result is retained as a
/// `Decimal` for the rest of the pipeline.
pub fn daily_rate(annual: Decimal) -> ProjectionResult<Decimal> {
    let base = Decimal::ONE + annual;
    if base <= Decimal::ZERO {
        return Err(ProjectionError::InvalidParameter(format!(
            "annual rate {annual} implies a non-positive growth factor"
        )));
    }

    let b = base.to_f64().unwrap_or(1.0);
    let daily = b.powf(1.0 / f64::from(BUSINESS_DAYS_PER_YEAR)) - 1.0;
    Decimal::from_f64_retain(daily).ok_or_else(|| {
        ProjectionError::InvalidParameter(format!(
            "daily rate for annual rate {annual} is not representable"
        ))
    })
}

/// Daily CDI rate implied by an annual Selic rate.
pub fn cdi_daily_rate(selic_annual: Decimal) -> ProjectionResult<Decimal> {
    daily_rate(cdi_annual_rate(selic_annual))
}
