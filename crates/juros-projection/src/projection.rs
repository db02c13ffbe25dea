//! Projection assembly: run parameters, the row ledger, and the driver.

use juros_core::calendars::Calendar;
use juros_core::tax::iof_percent;
use juros_core::types::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, ProjectionResult};
use crate::rates;
use crate::yields;

/// Shortest supported projection horizon, in business days.
pub const MIN_HORIZON_DAYS: u32 = 1;

/// Longest supported projection horizon, in business days.
pub const MAX_HORIZON_DAYS: u32 = 30;

/// Inputs for one projection run. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionParameters {
    /// Application date. The ledger starts on the next business day.
    pub start_date: Date,
    /// Invested amount.
    pub principal: Decimal,
    /// Annual Selic reference rate as a fraction (0.15 for 15%).
    pub selic_annual: Decimal,
    /// CDB rate as a fraction of CDI (1.0 for 100% of CDI).
    pub cdb_fraction: Decimal,
    /// Compromissada rate as a fraction of CDI.
    pub compromissada_fraction: Decimal,
    /// Number of business days to project.
    pub horizon_business_days: u32,
}

impl ProjectionParameters {
    /// Validates the parameter ranges.
    ///
    /// # Errors
    ///
    /// Returns `ProjectionError::InvalidParameter` for a non-positive
    /// principal, a negative rate or fraction, and
    /// `ProjectionError::HorizonOutOfBounds` for a horizon outside
    /// [`MIN_HORIZON_DAYS`]..=[`MAX_HORIZON_DAYS`].
    pub fn validate(&self) -> ProjectionResult<()> {
        if self.principal <= Decimal::ZERO {
            return Err(ProjectionError::InvalidParameter(
                "principal must be positive".to_string(),
            ));
        }

        if self.selic_annual < Decimal::ZERO {
            return Err(ProjectionError::InvalidParameter(
                "selic rate must not be negative".to_string(),
            ));
        }

        if self.cdb_fraction < Decimal::ZERO || self.compromissada_fraction < Decimal::ZERO {
            return Err(ProjectionError::InvalidParameter(
                "rate fractions must not be negative".to_string(),
            ));
        }

        if !(MIN_HORIZON_DAYS..=MAX_HORIZON_DAYS).contains(&self.horizon_business_days) {
            return Err(ProjectionError::HorizonOutOfBounds {
                requested: self.horizon_business_days,
                min: MIN_HORIZON_DAYS,
                max: MAX_HORIZON_DAYS,
            });
        }

        Ok(())
    }
}

/// One business day of the projection ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRow {
    /// 1-based business-day index.
    pub business_day: u32,
    /// Ledger date.
    pub date: Date,
    /// Calendar days elapsed since the start date.
    pub elapsed_calendar_days: i64,
    /// IOF withholding percentage for a redemption on this day.
    pub iof_percent: u32,
    /// CDB net value after IOF withholding and income tax.
    pub cdb_net: Decimal,
    /// Compromissada net value after income tax.
    pub compromissada_net: Decimal,
    /// Compromissada return as a percentage of the CDB return.
    pub cdb_equivalence_percent: Decimal,
}

/// Completed projection: the derived daily rate plus the ordered ledger.
///
/// Rows are in strictly increasing business-day order; the ledger length
/// always equals the requested horizon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    daily_rate: Decimal,
    rows: Vec<ProjectionRow>,
}

impl Projection {
    /// CDI daily rate applied to every row, derived once per run.
    #[must_use]
    pub fn daily_rate(&self) -> Decimal {
        self.daily_rate
    }

    /// Ledger rows in business-day order.
    #[must_use]
    pub fn rows(&self) -> &[ProjectionRow] {
        &self.rows
    }

    /// Number of ledger rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the ledger has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Consumes the projection, returning the ledger rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<ProjectionRow> {
        self.rows
    }
}

/// Runs a full projection of both instruments over `calendar`.
///
/// Derives the CDI daily rate once, generates the business-day dates, and
/// produces one [`ProjectionRow`] per business day in order. Pure and
/// deterministic: identical inputs over an identical calendar produce an
/// identical ledger.
pub fn project(
    params: &ProjectionParameters,
    calendar: &dyn Calendar,
) -> ProjectionResult<Projection> {
    params.validate()?;

    let daily_rate = rates::cdi_daily_rate(params.selic_annual)?;
    let dates = calendar.business_days_after(params.start_date, params.horizon_business_days)?;

    tracing::debug!(
        start = %params.start_date,
        horizon = params.horizon_business_days,
        calendar = calendar.name(),
        daily_rate = %daily_rate,
        "projecting ledger"
    );

    let mut rows = Vec::with_capacity(dates.len());
    for (offset, date) in dates.into_iter().enumerate() {
        let business_day = offset as u32 + 1;
        let elapsed = params.start_date.days_between(&date);
        let iof = iof_percent(elapsed);

        let cdb_gross = yields::compound_gross_return(
            params.principal,
            daily_rate,
            params.cdb_fraction,
            business_day,
        )?;
        let compromissada_gross = yields::compound_gross_return(
            params.principal,
            daily_rate,
            params.compromissada_fraction,
            business_day,
        )?;

        let cdb_net = yields::cdb_net_return(cdb_gross, iof);
        let compromissada_net = yields::compromissada_net_return(compromissada_gross);

        rows.push(ProjectionRow {
            business_day,
            date,
            elapsed_calendar_days: elapsed,
            iof_percent: iof,
            cdb_net,
            compromissada_net,
            cdb_equivalence_percent: yields::cdb_equivalence_percent(
                cdb_net,
                compromissada_net,
                params.principal,
            ),
        });
    }

    Ok(Projection { daily_rate, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use juros_core::calendars::{CustomCalendar, WeekendCalendar};
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn params(horizon: u32) -> ProjectionParameters {
        ProjectionParameters {
            start_date: date(2025, 1, 2),
            principal: dec!(10000),
            selic_annual: dec!(0.15),
            cdb_fraction: dec!(1.0),
            compromissada_fraction: dec!(0.5),
            horizon_business_days: horizon,
        }
    }

    #[test]
    fn test_ledger_length_matches_horizon() {
        let projection = project(&params(22), &WeekendCalendar).unwrap();
        assert_eq!(projection.len(), 22);
        assert!(!projection.is_empty());
    }

    #[test]
    fn test_ledger_indices_and_dates() {
        let projection = project(&params(10), &WeekendCalendar).unwrap();

        for (i, row) in projection.rows().iter().enumerate() {
            assert_eq!(row.business_day, i as u32 + 1);
            assert!(row.date > date(2025, 1, 2));
            assert!(row.date.is_weekday());
            assert!(row.elapsed_calendar_days >= i64::from(row.business_day));
        }
        assert!(projection.rows().windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn test_first_row_values() {
        let projection = project(&params(1), &WeekendCalendar).unwrap();
        let row = &projection.rows()[0];

        // Thursday start -> Friday Jan 3, one calendar day elapsed
        assert_eq!(row.date, date(2025, 1, 3));
        assert_eq!(row.elapsed_calendar_days, 1);
        assert_eq!(row.iof_percent, 96);
        assert!(row.cdb_net < row.compromissada_net);
    }

    #[test]
    fn test_weekend_gap_widens_elapsed_days() {
        // Friday start: first business day is Monday, three calendar days out
        let mut p = params(1);
        p.start_date = date(2025, 1, 3);

        let projection = project(&p, &WeekendCalendar).unwrap();
        let row = &projection.rows()[0];
        assert_eq!(row.date, date(2025, 1, 6));
        assert_eq!(row.elapsed_calendar_days, 3);
        assert_eq!(row.iof_percent, 90);
    }

    #[test]
    fn test_holidays_are_skipped() {
        // Jan 6 declared a holiday: the ledger must never include it
        let cal = CustomCalendar::from_dates("Teste", vec![date(2025, 1, 6)]);
        let projection = project(&params(5), &cal).unwrap();

        assert!(projection.rows().iter().all(|r| r.date != date(2025, 1, 6)));
        assert_eq!(projection.len(), 5);
    }

    #[test]
    fn test_projection_is_deterministic() {
        let a = project(&params(22), &WeekendCalendar).unwrap();
        let b = project(&params(22), &WeekendCalendar).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_horizon_out_of_bounds() {
        let mut p = params(0);
        assert!(matches!(
            project(&p, &WeekendCalendar),
            Err(ProjectionError::HorizonOutOfBounds { requested: 0, .. })
        ));

        p.horizon_business_days = 31;
        assert!(matches!(
            project(&p, &WeekendCalendar),
            Err(ProjectionError::HorizonOutOfBounds { requested: 31, .. })
        ));
    }

    #[test]
    fn test_rejects_bad_parameters() {
        let mut p = params(5);
        p.principal = Decimal::ZERO;
        assert!(project(&p, &WeekendCalendar).is_err());

        let mut p = params(5);
        p.cdb_fraction = dec!(-0.1);
        assert!(project(&p, &WeekendCalendar).is_err());

        let mut p = params(5);
        p.selic_annual = dec!(-0.01);
        assert!(project(&p, &WeekendCalendar).is_err());
    }

    #[test]
    fn test_calendar_exhaustion_propagates() {
        struct ClosedCalendar;

        impl Calendar for ClosedCalendar {
            fn name(&self) -> &'static str {
                "Closed"
            }

            fn is_business_day(&self, _date: Date) -> bool {
                false
            }
        }

        let err = project(&params(1), &ClosedCalendar).unwrap_err();
        assert!(matches!(err, ProjectionError::Calendar(_)));
    }

    #[test]
    fn test_row_serialization() {
        let projection = project(&params(1), &WeekendCalendar).unwrap();
        let json = serde_json::to_string(&projection.rows()[0]).unwrap();

        assert!(json.contains("\"business_day\":1"));
        assert!(json.contains("\"date\":\"2025-01-03\""));
        assert!(json.contains("\"iof_percent\":96"));

        // Decimals travel as floats, so compare those fields with a tolerance
        let parsed: ProjectionRow = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.business_day, 1);
        assert_eq!(parsed.date, date(2025, 1, 3));
        assert_eq!(parsed.iof_percent, 96);
        assert!((parsed.cdb_net - projection.rows()[0].cdb_net).abs() < dec!(0.000000001));
    }

    #[test]
    fn test_into_rows() {
        let projection = project(&params(3), &WeekendCalendar).unwrap();
        let rows = projection.into_rows();
        assert_eq!(rows.len(), 3);
    }
}
