use chrono::NaiveDate;

use crate::holidayerror::Result;
use crate::time::holiday::HolidayKind;
use crate::time::utility::{check_year, shift_days, ymd};

use super::recurringholiday::{RecurringHoliday, RuleEra};

/// Gregorian Easter Sunday (Meeus/Spencer Jones), integer arithmetic only.
pub fn easter_sunday(year: i32) -> Result<NaiveDate> {
    let year = check_year(year)?;

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
    let n = h + l - 7 * m + 114;

    ymd(year, (n / 31) as u32, (n % 31 + 1) as u32)
}

#[derive(Clone)]
pub struct EasterRelatedHoliday {
    kind: HolidayKind,
    era: RuleEra,
    shift_days: i32
}

impl EasterRelatedHoliday {
    pub fn new(kind: HolidayKind, era: RuleEra, shift_days: i32) -> EasterRelatedHoliday {
        EasterRelatedHoliday { kind, era, shift_days }
    }

    pub fn shift_days(&self) -> i32 {
        self.shift_days
    }
}

impl RecurringHoliday for EasterRelatedHoliday {
    fn kind(&self) -> HolidayKind {
        self.kind
    }

    fn era(&self) -> RuleEra {
        self.era
    }

    fn compute_date(&self, year: i32) -> Result<NaiveDate> {
        shift_days(easter_sunday(year)?, self.shift_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn known_easter_sundays() {
        let expected = [
            (1583, 4, 10),
            (1818, 3, 22),
            (1886, 4, 25),
            (1943, 4, 25),
            (1951, 3, 25),
            (2000, 4, 23),
            (2008, 3, 23),
            (2009, 4, 12),
            (2011, 4, 24),
            (2019, 4, 21),
            (2024, 3, 31),
            (2025, 4, 20),
            (2038, 4, 25),
            (4100, 4, 11),
            (5000, 3, 30),
            (9999, 3, 28)
        ];
        for (y, m, d) in expected {
            assert_eq!(easter_sunday(y).unwrap(), date(y, m, d), "Easter {}", y);
        }
    }

    #[test]
    fn outside_gregorian_domain() {
        assert!(easter_sunday(1582).unwrap_err().is_invalid_input());
        assert!(easter_sunday(-1).unwrap_err().is_invalid_input());
        assert!(easter_sunday(10000).unwrap_err().is_invalid_input());
    }

    #[test]
    fn shifted_holidays() {
        let good_friday = EasterRelatedHoliday::new(HolidayKind::GoodFriday, RuleEra::ALWAYS, -2);
        let whit_monday = EasterRelatedHoliday::new(HolidayKind::WhitMonday, RuleEra::until_year(2004), 50);
        assert_eq!(good_friday.compute_date(2009).unwrap(), date(2009, 4, 10));
        assert_eq!(whit_monday.get_holiday(2004).unwrap().unwrap().date(), date(2004, 5, 31));
        assert!(whit_monday.get_holiday(2005).unwrap().is_none());
    }
}
