//! Net-yield calculations for CDB and compromissada positions.
//!
//! Both instruments compound a fraction of the CDI daily rate once per
//! business day. The CDB additionally suffers regressive IOF withholding
//! on its earnings before the flat income tax; the compromissada pays
//! income tax only.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{ProjectionError, ProjectionResult};

/// Flat income-tax rate on earnings for redemptions within 180 days.
pub const IR_FLAT_RATE: Decimal = dec!(0.225);

/// Compound gross return of `principal` earning `rate_fraction` of
/// `daily_rate` per business day, over `business_days` days.
///
/// # Formula
///
/// ```text
/// gross = principal * ((1 + daily_rate * fraction)^business_days - 1)
/// ```
///
/// Compounding is per business day, not per calendar day.
pub fn compound_gross_return(
    principal: Decimal,
    daily_rate: Decimal,
    rate_fraction: Decimal,
    business_days: u32,
) -> ProjectionResult<Decimal> {
    if principal <= Decimal::ZERO {
        return Err(ProjectionError::InvalidParameter(
            "principal must be positive".to_string(),
        ));
    }

    let growth = pow_decimal(Decimal::ONE + daily_rate * rate_fraction, business_days);
    Ok(principal * (growth - Decimal::ONE))
}

/// Net CDB return after IOF withholding and income tax.
///
/// IOF is charged on the gross earnings; the flat income tax applies to
/// what remains.
///
/// # Formula
///
/// ```text
/// net = (gross - gross * iof / 100) * (1 - 0.225)
/// ```
#[must_use]
pub fn cdb_net_return(gross: Decimal, iof_percent: u32) -> Decimal {
    let withheld = gross * Decimal::from(iof_percent) / dec!(100);
    (gross - withheld) * (Decimal::ONE - IR_FLAT_RATE)
}

/// Net compromissada return after income tax. No IOF applies.
#[must_use]
pub fn compromissada_net_return(gross: Decimal) -> Decimal {
    gross * (Decimal::ONE - IR_FLAT_RATE)
}

/// Compromissada net return as a percentage of the CDB net return, both
/// normalized to percent of principal first.
///
/// Returns 0 when the CDB percent-of-principal is exactly zero: the
/// degenerate comparison is reported as "0% equivalent" rather than an
/// error, even when the compromissada side is nonzero. The same rule
/// applies to a zero principal.
#[must_use]
pub fn cdb_equivalence_percent(
    cdb_net: Decimal,
    compromissada_net: Decimal,
    principal: Decimal,
) -> Decimal {
    if principal.is_zero() {
        return Decimal::ZERO;
    }

    let cdb_pct = cdb_net / principal * dec!(100);
    let compromissada_pct = compromissada_net / principal * dec!(100);

    if cdb_pct.is_zero() {
        return Decimal::ZERO;
    }
    compromissada_pct / cdb_pct * dec!(100)
}

/// Decimal exponentiation with an integer day count, via f64.
#[inline]
fn pow_decimal(base: Decimal, exp: u32) -> Decimal {
    let b = base.to_f64().unwrap_or(1.0);
    Decimal::from_f64_retain(b.powi(exp as i32)).unwrap_or(Decimal::ONE)
}
