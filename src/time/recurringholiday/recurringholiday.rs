use chrono::{Datelike, NaiveDate};

use crate::holidayerror::Result;
use crate::time::holiday::{Holiday, HolidayKind};

/// Inclusive span of years during which a rule is in force.
/// `None` leaves that side open.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct RuleEra {
    first_year: Option<i32>,
    last_year: Option<i32>
}

impl RuleEra {
    pub const ALWAYS: RuleEra = RuleEra { first_year: None, last_year: None };

    pub const fn new(first_year: Option<i32>, last_year: Option<i32>) -> RuleEra {
        RuleEra { first_year, last_year }
    }

    pub const fn from_year(first_year: i32) -> RuleEra {
        RuleEra::new(Some(first_year), None)
    }

    pub const fn until_year(last_year: i32) -> RuleEra {
        RuleEra::new(None, Some(last_year))
    }

    pub fn first_year(&self) -> Option<i32> {
        self.first_year
    }

    pub fn last_year(&self) -> Option<i32> {
        self.last_year
    }

    #[inline]
    pub fn contains(&self, year: i32) -> bool {
        self.first_year.is_none_or(|y| year >= y) && self.last_year.is_none_or(|y| year <= y)
    }
}

pub trait RecurringHoliday: Send + Sync {

    fn kind(&self) -> HolidayKind;

    fn era(&self) -> RuleEra;

    /// Date of the holiday in `year`, assuming the rule is in force.
    fn compute_date(&self, year: i32) -> Result<NaiveDate>;

    fn get_holiday(&self, year: i32) -> Result<Option<Holiday>> {
        if !self.era().contains(year) {
            return Ok(None);
        }
        let date = self.compute_date(year)?;
        Ok(Some(Holiday::new(date, self.kind())))
    }

    fn is_holiday(&self, d: &NaiveDate) -> Result<bool> {
        let holiday = self.get_holiday(d.year())?;
        Ok(holiday.is_some_and(|h| h.date() == *d))
    }
}
