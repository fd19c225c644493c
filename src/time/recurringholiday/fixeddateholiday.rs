use chrono::NaiveDate;

use crate::holidayerror::{HolidayError, Result};
use crate::time::holiday::HolidayKind;
use crate::time::utility::ymd;

use super::recurringholiday::{RecurringHoliday, RuleEra};

#[derive(Clone)]
pub struct FixedDateHoliday {
    kind: HolidayKind,
    era: RuleEra,
    month: u32,
    day: u32
}

impl FixedDateHoliday {
    pub fn new(kind: HolidayKind, era: RuleEra, month: u32, day: u32) -> Result<FixedDateHoliday> {
        // Validate against a leap year so Feb 29 is accepted.
        if NaiveDate::from_ymd_opt(2000, month, day).is_none() {
            return Err(HolidayError::InvalidInput(format!("{:02}-{:02} is not a valid month/day", month, day)));
        }
        Ok(FixedDateHoliday { kind, era, month, day })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn kind(&self) -> HolidayKind {
        self.kind
    }

    fn era(&self) -> RuleEra {
        self.era
    }

    fn compute_date(&self, year: i32) -> Result<NaiveDate> {
        ymd(year, self.month, self.day)
    }
}
