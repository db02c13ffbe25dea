//! Regressive IOF withholding for short-horizon redemptions.
//!
//! IOF is charged on the earnings of a position redeemed within 30
//! calendar days of application, at a percentage that steps down daily
//! from 96% to zero. The schedule is regulatory and exact; it is never
//! interpolated.

/// IOF percentage withheld on earnings, indexed by elapsed calendar days
/// since application (day 1 through day 30).
const IOF_PERCENT_BY_ELAPSED_DAY: [u32; 30] = [
    96, 93, 90, 86, 83, 80, 76, 73, 70, 66, // days 1-10
    63, 60, 56, 53, 50, 46, 43, 40, 36, 33, // days 11-20
    30, 26, 23, 20, 16, 13, 10, 6, 3, 0, // days 21-30
];

/// Returns the IOF withholding percentage for a redemption
/// `elapsed_calendar_days` after application.
///
/// Outside the 1..=30 window (zero, negative, or beyond 30 elapsed days)
/// no withholding applies and the lookup returns 0. Absence from the table
/// means "no withholding", not an error.
#[must_use]
pub fn iof_percent(elapsed_calendar_days: i64) -> u32 {
    if (1..=30).contains(&elapsed_calendar_days) {
        IOF_PERCENT_BY_ELAPSED_DAY[(elapsed_calendar_days - 1) as usize]
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_boundaries() {
        assert_eq!(iof_percent(1), 96);
        assert_eq!(iof_percent(30), 0);
    }

    #[test]
    fn test_outside_domain_is_zero() {
        assert_eq!(iof_percent(0), 0);
        assert_eq!(iof_percent(-1), 0);
        assert_eq!(iof_percent(31), 0);
        assert_eq!(iof_percent(365), 0);
    }

    #[test]
    fn test_spot_values() {
        assert_eq!(iof_percent(5), 83);
        assert_eq!(iof_percent(15), 50);
        assert_eq!(iof_percent(29), 3);
    }

    #[test]
    fn test_non_increasing() {
        for day in 1..30 {
            assert!(
                iof_percent(day + 1) <= iof_percent(day),
                "IOF must not increase from day {day} to day {}",
                day + 1
            );
        }
    }
}
