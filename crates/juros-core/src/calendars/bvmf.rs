//! B3 exchange calendar (Brasil, Bolsa, Balcão).

use super::Calendar;
use crate::types::Date;

/// B3 exchange calendar for Brazilian fixed-income settlement.
///
/// Covers the national holidays the exchange observes, including the
/// moveable feasts tied to Easter: Carnival Monday and Tuesday, Good
/// Friday, and Corpus Christi.
#[derive(Debug, Clone, Copy, Default)]
pub struct BvmfCalendar;

impl BvmfCalendar {
    /// Returns true if the date is a B3 exchange holiday.
    fn is_exchange_holiday(&self, date: Date) -> bool {
        let year = date.year();

        // Fixed-date holidays
        match (date.month(), date.day()) {
            // Confraternização Universal
            (1, 1) => return true,
            // Tiradentes
            (4, 21) => return true,
            // Dia do Trabalho
            (5, 1) => return true,
            // Independência do Brasil
            (9, 7) => return true,
            // Nossa Senhora Aparecida
            (10, 12) => return true,
            // Finados
            (11, 2) => return true,
            // Proclamação da República
            (11, 15) => return true,
            // Consciência Negra, national holiday since 2024
            (11, 20) if year >= 2024 => return true,
            // Natal
            (12, 25) => return true,
            _ => {}
        }

        // Moveable feasts as offsets from Easter Sunday: Carnival Monday
        // (-48), Carnival Tuesday (-47), Good Friday (-2), Corpus Christi
        // (+60).
        let Some(easter) = easter_sunday(year) else {
            return false;
        };
        matches!(date - easter, -48 | -47 | -2 | 60)
    }
}

impl Calendar for BvmfCalendar {
    fn name(&self) -> &'static str {
        "BVMF"
    }

    fn is_business_day(&self, date: Date) -> bool {
        date.is_weekday() && !self.is_exchange_holiday(date)
    }
}

/// Calculates Easter Sunday using the Anonymous Gregorian algorithm.
#[allow(clippy::many_single_char_names)]
#[must_use]
pub fn easter_sunday(year: i32) -> Option<Date> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = ((h + l - 7 * m + 114) % 31) + 1;

    Date::from_ymd(year, month as u32, day as u32).ok()
}
