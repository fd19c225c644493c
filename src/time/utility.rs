use chrono::{
    Datelike,
    Days,
    NaiveDate,
    Weekday
};

use crate::holidayerror::{HolidayError, Result};

/// First year of the Gregorian Easter computation.
pub const MIN_YEAR: i32 = 1583;

/// Last four-digit year. The Easter formula itself has no upper limit.
pub const MAX_YEAR: i32 = 9999;

const ONE_DAY: Days = Days::new(1);

#[inline]
pub fn check_year(year: i32) -> Result<i32> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(year)
    } else {
        Err(HolidayError::year_out_of_range(year, MIN_YEAR, MAX_YEAR))
    }
}

pub fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| HolidayError::invalid_date(year, month, day))
}

#[inline]
pub fn new_years_day(year: i32) -> Result<NaiveDate> {
    ymd(year, 1, 1)
}

/// Starts at `start` and steps one day at a time until `weekday` is reached.
pub fn first_weekday_on_or_after(start: NaiveDate, weekday: Weekday) -> Result<NaiveDate> {
    let mut d = start;
    while d.weekday() != weekday {
        d = d.checked_add_days(ONE_DAY).ok_or_else(|| {
            HolidayError::InvalidInput(format!("no {:?} on or after {} within the supported date range", weekday, start))
        })?;
    }
    Ok(d)
}

/// Shifts a date by a signed number of days.
pub fn shift_days(d: NaiveDate, n: i32) -> Result<NaiveDate> {
    let days = Days::new(n.unsigned_abs() as u64);
    let shifted = if n >= 0 {
        d.checked_add_days(days)
    } else {
        d.checked_sub_days(days)
    };
    shifted.ok_or_else(|| HolidayError::InvalidInput(format!("{} shifted by {} days is out of range", d, n)))
}
