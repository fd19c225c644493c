use std::sync::LazyLock;

use chrono::{NaiveDate, Weekday};

use crate::holidayerror::{HolidayError, Result};
use crate::time::holiday::{Holiday, HolidayKind};
use crate::time::recurringholiday::easterrelatedholiday::EasterRelatedHoliday;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::recurringholiday::{RecurringHoliday, RuleEra};
use crate::time::recurringholiday::weekdaywindowholiday::WeekdayWindowHoliday;
use crate::time::utility::check_year;

pub use crate::time::recurringholiday::easterrelatedholiday::easter_sunday;

/// Första maj became a public holiday in 1939.
pub const LABOUR_DAY_FIRST_YEAR: i32 = 1939;

/// Last year of the pre-1954 rules: fixed Midsummer and All Saints' Day,
/// and Jungfru Marias bebådelsedag on March 25.
pub const FIXED_SAINTS_DAYS_LAST_YEAR: i32 = 1953;

/// Annandag pingst was replaced by Nationaldagen in 2005.
pub const WHIT_MONDAY_LAST_YEAR: i32 = 2004;

/// The Swedish public holiday table, one rule per holiday and era.
pub struct SwedishHolidayRules {
    rules: Vec<Box<dyn RecurringHoliday>>
}

impl SwedishHolidayRules {
    pub fn new() -> Result<SwedishHolidayRules> {
        let always = RuleEra::ALWAYS;
        let fixed_saints_days = RuleEra::until_year(FIXED_SAINTS_DAYS_LAST_YEAR);
        let moving_saints_days = RuleEra::from_year(FIXED_SAINTS_DAYS_LAST_YEAR + 1);

        let rules: Vec<Box<dyn RecurringHoliday>> = vec![
            Box::new(FixedDateHoliday::new(HolidayKind::NewYearsDay, always, 1, 1)?),
            Box::new(FixedDateHoliday::new(HolidayKind::Epiphany, always, 1, 6)?),
            Box::new(FixedDateHoliday::new(HolidayKind::AnnunciationOfMary, fixed_saints_days, 3, 25)?),
            Box::new(EasterRelatedHoliday::new(HolidayKind::GoodFriday, always, -2)),
            Box::new(EasterRelatedHoliday::new(HolidayKind::EasterSunday, always, 0)),
            Box::new(EasterRelatedHoliday::new(HolidayKind::EasterMonday, always, 1)),
            Box::new(FixedDateHoliday::new(HolidayKind::LabourDay, RuleEra::from_year(LABOUR_DAY_FIRST_YEAR), 5, 1)?),
            Box::new(EasterRelatedHoliday::new(HolidayKind::WhitMonday, RuleEra::until_year(WHIT_MONDAY_LAST_YEAR), 50)),
            Box::new(FixedDateHoliday::new(HolidayKind::NationalDay, RuleEra::from_year(WHIT_MONDAY_LAST_YEAR + 1), 6, 6)?),
            Box::new(FixedDateHoliday::new(HolidayKind::MidsummerDay, fixed_saints_days, 6, 24)?),
            Box::new(WeekdayWindowHoliday::new(HolidayKind::MidsummerDay, moving_saints_days, 6, 20, Weekday::Sat)?),
            Box::new(FixedDateHoliday::new(HolidayKind::AllSaintsDay, fixed_saints_days, 11, 1)?),
            Box::new(WeekdayWindowHoliday::new(HolidayKind::AllSaintsDay, moving_saints_days, 10, 31, Weekday::Sat)?),
            Box::new(FixedDateHoliday::new(HolidayKind::ChristmasDay, always, 12, 25)?),
            Box::new(FixedDateHoliday::new(HolidayKind::SecondDayOfChristmas, always, 12, 26)?)
        ];

        Ok(SwedishHolidayRules { rules })
    }

    pub fn rules(&self) -> &[Box<dyn RecurringHoliday>] {
        &self.rules
    }

    /// All holidays of `year`, sorted by date. Holidays sharing a date
    /// keep table order.
    pub fn holidays_for_year(&self, year: i32) -> Result<Vec<Holiday>> {
        let year = check_year(year)?;
        let mut holidays = Vec::with_capacity(self.rules.len());
        for rule in self.rules.iter() {
            if let Some(holiday) = rule.get_holiday(year)? {
                holidays.push(holiday);
            }
        }
        holidays.sort_by_key(|h| h.date());
        Ok(holidays)
    }

    /// Date of `kind` in `year`, or `None` when no rule for it is in force.
    pub fn date_of(&self, kind: HolidayKind, year: i32) -> Result<Option<NaiveDate>> {
        let year = check_year(year)?;
        for rule in self.rules.iter().filter(|r| r.kind() == kind) {
            if let Some(holiday) = rule.get_holiday(year)? {
                return Ok(Some(holiday.date()));
            }
        }
        Ok(None)
    }

    fn required_date_of(&self, kind: HolidayKind, year: i32) -> Result<NaiveDate> {
        self.date_of(kind, year)?
            .ok_or_else(|| HolidayError::InvalidInput(format!("{} is not observed in {}", kind.english_name(), year)))
    }
}

static STANDARD_RULES: LazyLock<std::result::Result<SwedishHolidayRules, String>> =
    LazyLock::new(|| SwedishHolidayRules::new().map_err(|error| error.to_string()));

/// The shared table behind the free functions, built on first use.
pub fn standard_rules() -> Result<&'static SwedishHolidayRules> {
    STANDARD_RULES.as_ref().map_err(|error| HolidayError::InvalidInput(error.clone()))
}

/// Midsommardagen: the Saturday in June 20-26, or June 24 before 1954.
pub fn midsummer_day(year: i32) -> Result<NaiveDate> {
    standard_rules()?.required_date_of(HolidayKind::MidsummerDay, year)
}

/// Alla helgons dag: the Saturday in October 31 - November 6, or
/// November 1 before 1954.
pub fn all_saints_day(year: i32) -> Result<NaiveDate> {
    standard_rules()?.required_date_of(HolidayKind::AllSaintsDay, year)
}

pub fn holidays_for_year(year: i32) -> Result<Vec<Holiday>> {
    standard_rules()?.holidays_for_year(year)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn kinds(year: i32) -> Vec<HolidayKind> {
        holidays_for_year(year).unwrap().iter().map(|h| h.kind()).collect()
    }

    #[test]
    fn reference_dates() {
        assert_eq!(easter_sunday(2009).unwrap(), date(2009, 4, 12));
        assert_eq!(midsummer_day(2009).unwrap(), date(2009, 6, 20));
        assert_eq!(midsummer_day(1950).unwrap(), date(1950, 6, 24));
        assert_eq!(all_saints_day(2009).unwrap(), date(2009, 10, 31));
        assert_eq!(all_saints_day(1950).unwrap(), date(1950, 11, 1));
    }

    #[test]
    fn counts_per_era() {
        assert_eq!(holidays_for_year(1938).unwrap().len(), 11);
        assert_eq!(holidays_for_year(1939).unwrap().len(), 12);
        assert_eq!(holidays_for_year(1953).unwrap().len(), 12);
        assert_eq!(holidays_for_year(1954).unwrap().len(), 11);
        assert_eq!(holidays_for_year(2004).unwrap().len(), 11);
        assert_eq!(holidays_for_year(2005).unwrap().len(), 11);
    }

    #[test]
    fn year_2009_in_order() {
        let holidays = holidays_for_year(2009).unwrap();
        let expected = [
            (date(2009, 1, 1), HolidayKind::NewYearsDay),
            (date(2009, 1, 6), HolidayKind::Epiphany),
            (date(2009, 4, 10), HolidayKind::GoodFriday),
            (date(2009, 4, 12), HolidayKind::EasterSunday),
            (date(2009, 4, 13), HolidayKind::EasterMonday),
            (date(2009, 5, 1), HolidayKind::LabourDay),
            (date(2009, 6, 6), HolidayKind::NationalDay),
            (date(2009, 6, 20), HolidayKind::MidsummerDay),
            (date(2009, 10, 31), HolidayKind::AllSaintsDay),
            (date(2009, 12, 25), HolidayKind::ChristmasDay),
            (date(2009, 12, 26), HolidayKind::SecondDayOfChristmas)
        ];
        assert_eq!(holidays.len(), expected.len());
        for (holiday, (d, kind)) in holidays.iter().zip(expected) {
            assert_eq!(holiday.date(), d);
            assert_eq!(holiday.kind(), kind);
        }
    }

    #[test]
    fn table_shape() {
        let rules = standard_rules().unwrap();
        assert!(std::ptr::eq(rules, standard_rules().unwrap()));
        assert_eq!(rules.rules().len(), 15);

        let midsummer_rules: Vec<RuleEra> = rules
            .rules()
            .iter()
            .filter(|r| r.kind() == HolidayKind::MidsummerDay)
            .map(|r| r.era())
            .collect();
        assert_eq!(midsummer_rules, vec![RuleEra::until_year(1953), RuleEra::from_year(1954)]);

        // No holiday has two rules in force in the same year.
        for year in [1583, 1938, 1939, 1953, 1954, 2004, 2005, 9999] {
            let in_force: Vec<HolidayKind> = rules
                .rules()
                .iter()
                .filter(|r| r.era().contains(year))
                .map(|r| r.kind())
                .collect();
            let distinct: HashSet<HolidayKind> = in_force.iter().copied().collect();
            assert_eq!(distinct.len(), in_force.len(), "{}", year);
        }
    }

    #[test]
    fn date_of_kind_outside_era() {
        let rules = SwedishHolidayRules::new().unwrap();
        assert_eq!(rules.date_of(HolidayKind::NationalDay, 2004).unwrap(), None);
        assert_eq!(rules.date_of(HolidayKind::NationalDay, 2005).unwrap(), Some(date(2005, 6, 6)));
        assert_eq!(rules.date_of(HolidayKind::WhitMonday, 2004).unwrap(), Some(date(2004, 5, 31)));
        assert_eq!(rules.date_of(HolidayKind::LabourDay, 1938).unwrap(), None);
    }

    #[test]
    fn annunciation_may_share_easter_sunday() {
        let holidays = holidays_for_year(1951).unwrap();
        let on_march_25: Vec<HolidayKind> = holidays
            .iter()
            .filter(|h| h.date() == date(1951, 3, 25))
            .map(|h| h.kind())
            .collect();
        assert_eq!(on_march_25, vec![HolidayKind::AnnunciationOfMary, HolidayKind::EasterSunday]);
    }

    #[test]
    fn invalid_years() {
        assert!(holidays_for_year(1000).unwrap_err().is_invalid_input());
        assert!(midsummer_day(10000).unwrap_err().is_invalid_input());
        assert!(all_saints_day(i32::MIN).unwrap_err().is_invalid_input());
    }

    #[test]
    fn era_boundaries() {
        assert!(kinds(1953).contains(&HolidayKind::AnnunciationOfMary));
        assert!(!kinds(1954).contains(&HolidayKind::AnnunciationOfMary));
        assert!(kinds(2004).contains(&HolidayKind::WhitMonday));
        assert!(!kinds(2004).contains(&HolidayKind::NationalDay));
        assert!(kinds(2005).contains(&HolidayKind::NationalDay));
        assert!(!kinds(2005).contains(&HolidayKind::WhitMonday));
        assert!(!kinds(1938).contains(&HolidayKind::LabourDay));
        assert!(kinds(1939).contains(&HolidayKind::LabourDay));
    }
}
