use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HolidayError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("start date {start} needs to be earlier than end date {end}")]
    Range {
        start: NaiveDate,
        end: NaiveDate
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    JsonParse(#[from] serde_json::Error)
}

impl HolidayError {
    pub fn year_out_of_range(year: i32, min_year: i32, max_year: i32) -> HolidayError {
        HolidayError::InvalidInput(format!("year {} out of range [{}, {}]", year, min_year, max_year))
    }

    pub fn invalid_date(year: i32, month: u32, day: u32) -> HolidayError {
        HolidayError::InvalidInput(format!("{:04}-{:02}-{:02} is not a valid calendar date", year, month, day))
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, HolidayError::InvalidInput(_))
    }

    pub fn is_range(&self) -> bool {
        matches!(self, HolidayError::Range { .. })
    }
}

pub type Result<T> = std::result::Result<T, HolidayError>;
