use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use tracing::{debug, trace, warn};

use crate::holidayerror::{HolidayError, Result};
use crate::time::calendar::swedishholidayrules::SwedishHolidayRules;
use crate::time::holiday::Holiday;
use crate::time::utility::{check_year, new_years_day};

/// Append-only store of generated holidays.
///
/// Years are generated lazily: a year counts as generated once its
/// New Year's Day is in the registry, and from then on every query that
/// touches it is answered from memory. Entries are never removed.
///
/// Queries that may generate a year take `&mut self`. To share one
/// registry across threads, wrap it in `Arc<Mutex<HolidayRegistry>>`.
pub struct HolidayRegistry {
    rules: SwedishHolidayRules,
    holidays: Vec<Holiday>,
    date_index: HashSet<NaiveDate>
}

impl HolidayRegistry {
    pub fn new() -> Result<HolidayRegistry> {
        Ok(HolidayRegistry::with_rules(SwedishHolidayRules::new()?))
    }

    pub fn with_rules(rules: SwedishHolidayRules) -> HolidayRegistry {
        HolidayRegistry {
            rules,
            holidays: Vec::new(),
            date_index: HashSet::new()
        }
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Holiday> {
        self.holidays.iter()
    }

    pub fn is_year_generated(&self, year: i32) -> bool {
        new_years_day(year).is_ok_and(|d| self.date_index.contains(&d))
    }

    pub fn generated_years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.date_index
            .iter()
            .filter(|d| d.month() == 1 && d.day() == 1)
            .map(|d| d.year())
            .collect();
        years.sort_unstable();
        years
    }

    /// Generates the holidays of `year` unless that has already been done.
    pub fn ensure_year_generated(&mut self, year: i32) -> Result<()> {
        let year = check_year(year)?;
        if self.date_index.contains(&new_years_day(year)?) {
            return Ok(());
        }

        let generated = self.rules.holidays_for_year(year)?;
        debug!(year, count = generated.len(), "generated holidays");
        self.date_index.extend(generated.iter().map(|h| h.date()));
        self.holidays.extend(generated);
        Ok(())
    }

    /// Generates every year in `start_year..=end_year`.
    pub fn preload(&mut self, start_year: i32, end_year: i32) -> Result<()> {
        if start_year > end_year {
            warn!(start_year, end_year, "empty preload span");
            return Ok(());
        }
        for year in start_year..=end_year {
            self.ensure_year_generated(year)?;
        }
        Ok(())
    }

    pub fn is_holiday(&mut self, d: NaiveDate) -> Result<bool> {
        self.ensure_year_generated(d.year())?;
        let holiday = self.date_index.contains(&d);
        trace!(date = %d, holiday, "holiday lookup");
        Ok(holiday)
    }

    /// Holidays on `d`. Usually zero or one; before 1954 the Annunciation
    /// can share a date with an Easter holiday.
    pub fn holidays_on(&mut self, d: NaiveDate) -> Result<Vec<Holiday>> {
        if !self.is_holiday(d)? {
            return Ok(Vec::new());
        }
        Ok(self.holidays.iter().filter(|h| h.date() == d).copied().collect())
    }

    /// Holidays with `start <= date <= end`, sorted by date.
    pub fn holidays_between(&mut self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Holiday>> {
        if start > end {
            return Err(HolidayError::Range { start, end });
        }
        for year in start.year()..=end.year() {
            self.ensure_year_generated(year)?;
        }

        let mut holidays: Vec<Holiday> = self.holidays
            .iter()
            .filter(|h| h.date() >= start && h.date() <= end)
            .copied()
            .collect();
        holidays.sort_by_key(|h| h.date());
        trace!(%start, %end, count = holidays.len(), "holiday range query");
        Ok(holidays)
    }

    pub fn holidays_in_year(&mut self, year: i32) -> Result<Vec<Holiday>> {
        self.ensure_year_generated(year)?;
        let mut holidays: Vec<Holiday> = self.holidays
            .iter()
            .filter(|h| h.date().year() == year)
            .copied()
            .collect();
        holidays.sort_by_key(|h| h.date());
        Ok(holidays)
    }

    /// All generated holidays as a JSON array, sorted by date.
    pub fn to_json(&self) -> Result<String> {
        let mut holidays = self.holidays.clone();
        holidays.sort_by_key(|h| h.date());
        Ok(serde_json::to_string_pretty(&holidays)?)
    }
}
