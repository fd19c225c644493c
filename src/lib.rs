pub mod configuration;

pub mod holidayerror;

pub mod time {
    pub mod utility;
    pub mod holiday;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod fixeddateholiday;
        pub mod easterrelatedholiday;
        pub mod weekdaywindowholiday;
    }

    pub mod calendar {
        pub mod swedishholidayrules;
        pub mod holidayregistry;
    }
}

pub use configuration::Configuration;
pub use holidayerror::{HolidayError, Result};
pub use time::calendar::holidayregistry::HolidayRegistry;
pub use time::calendar::swedishholidayrules::{
    all_saints_day,
    easter_sunday,
    holidays_for_year,
    midsummer_day,
    standard_rules,
    SwedishHolidayRules
};
pub use time::holiday::{Holiday, HolidayKind};
