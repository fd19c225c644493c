use chrono::{NaiveDate, Weekday};

use crate::holidayerror::{HolidayError, Result};
use crate::time::holiday::HolidayKind;
use crate::time::utility::{first_weekday_on_or_after, ymd};

use super::recurringholiday::{RecurringHoliday, RuleEra};

/// The first `weekday` on or after `month`/`start_day`, i.e. the one
/// falling in the seven-day window starting there.
#[derive(Clone)]
pub struct WeekdayWindowHoliday {
    kind: HolidayKind,
    era: RuleEra,
    month: u32,
    start_day: u32,
    weekday: Weekday
}

impl WeekdayWindowHoliday {
    pub fn new(kind: HolidayKind, era: RuleEra, month: u32, start_day: u32, weekday: Weekday) -> Result<WeekdayWindowHoliday> {
        if NaiveDate::from_ymd_opt(2000, month, start_day).is_none() {
            return Err(HolidayError::InvalidInput(format!("{:02}-{:02} is not a valid month/day", month, start_day)));
        }
        Ok(WeekdayWindowHoliday { kind, era, month, start_day, weekday })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn start_day(&self) -> u32 {
        self.start_day
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl RecurringHoliday for WeekdayWindowHoliday {
    fn kind(&self) -> HolidayKind {
        self.kind
    }

    fn era(&self) -> RuleEra {
        self.era
    }

    fn compute_date(&self, year: i32) -> Result<NaiveDate> {
        first_weekday_on_or_after(ymd(year, self.month, self.start_day)?, self.weekday)
    }
}
