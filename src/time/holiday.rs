use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use serde::{
    Deserialize,
    Serialize
};

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum HolidayKind {
    NewYearsDay,
    Epiphany,
    AnnunciationOfMary,
    GoodFriday,
    EasterSunday,
    EasterMonday,
    LabourDay,
    WhitMonday,
    NationalDay,
    MidsummerDay,
    AllSaintsDay,
    ChristmasDay,
    SecondDayOfChristmas
}

impl HolidayKind {
    /// Swedish name of the holiday.
    pub fn name(&self) -> &'static str {
        match self {
            HolidayKind::NewYearsDay => "Nyårsdagen",
            HolidayKind::Epiphany => "Trettondedag jul",
            HolidayKind::AnnunciationOfMary => "Jungfru Marias bebådelsedag",
            HolidayKind::GoodFriday => "Långfredagen",
            HolidayKind::EasterSunday => "Påskdagen",
            HolidayKind::EasterMonday => "Annandag påsk",
            HolidayKind::LabourDay => "Första maj",
            HolidayKind::WhitMonday => "Annandag pingst",
            HolidayKind::NationalDay => "Nationaldagen",
            HolidayKind::MidsummerDay => "Midsommardagen",
            HolidayKind::AllSaintsDay => "Alla helgons dag",
            HolidayKind::ChristmasDay => "Juldagen",
            HolidayKind::SecondDayOfChristmas => "Annandag jul"
        }
    }

    pub fn english_name(&self) -> &'static str {
        match self {
            HolidayKind::NewYearsDay => "New Year's Day",
            HolidayKind::Epiphany => "Epiphany",
            HolidayKind::AnnunciationOfMary => "Annunciation of Mary",
            HolidayKind::GoodFriday => "Good Friday",
            HolidayKind::EasterSunday => "Easter Sunday",
            HolidayKind::EasterMonday => "Easter Monday",
            HolidayKind::LabourDay => "Labour Day",
            HolidayKind::WhitMonday => "Whit Monday",
            HolidayKind::NationalDay => "National Day",
            HolidayKind::MidsummerDay => "Midsummer Day",
            HolidayKind::AllSaintsDay => "All Saints' Day",
            HolidayKind::ChristmasDay => "Christmas Day",
            HolidayKind::SecondDayOfChristmas => "Second Day of Christmas"
        }
    }
}

impl fmt::Display for HolidayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Serialize, Deserialize)]
struct HolidayJsonProp {
    date: NaiveDate,
    kind: HolidayKind,
    #[serde(default)]
    name: String
}

/// A holiday is a date together with the rule that produced it.
///
/// Holidays compare by date only, through [`Holiday::cmp_by_date`] and
/// [`Holiday::same_date`]. Sort collections by [`Holiday::date`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(into = "HolidayJsonProp", from = "HolidayJsonProp")]
pub struct Holiday {
    date: NaiveDate,
    kind: HolidayKind
}

impl Holiday {
    pub fn new(date: NaiveDate, kind: HolidayKind) -> Holiday {
        Holiday { date, kind }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn kind(&self) -> HolidayKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    #[inline]
    pub fn cmp_by_date(&self, other: &Holiday) -> Ordering {
        self.date.cmp(&other.date)
    }

    #[inline]
    pub fn same_date(&self, other: &Holiday) -> bool {
        self.date == other.date
    }
}

impl From<Holiday> for HolidayJsonProp {
    fn from(holiday: Holiday) -> HolidayJsonProp {
        HolidayJsonProp {
            date: holiday.date,
            kind: holiday.kind,
            name: holiday.name().to_owned()
        }
    }
}

impl From<HolidayJsonProp> for Holiday {
    fn from(json_prop: HolidayJsonProp) -> Holiday {
        Holiday::new(json_prop.date, json_prop.kind)
    }
}

impl fmt::Display for Holiday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.name())
    }
}
