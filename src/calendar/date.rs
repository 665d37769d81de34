use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::days_in_month;
use crate::error::PickerError;

/// A day/month/year triple as composed by the picker.
///
/// `month` is 0-based. Construction through [`CalendarDate::new`] does not
/// check the day against the month, so an out-of-range value such as
/// February 30 is representable; [`CalendarDate::is_valid`] reports it.
///
/// Serializes as its ISO `YYYY-MM-DD` string. Deserializing rejects dates
/// that do not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct CalendarDate {
    pub year:  i32,
    pub month: u32,
    pub day:   u32,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Validating constructor.
    pub fn try_new(year: i32, month: u32, day: u32) -> Result<Self, PickerError> {
        if month > 11 {
            return Err(PickerError::InvalidMonth { month });
        }
        let max_day = days_in_month(month, year);
        if day == 0 || day > max_day {
            return Err(PickerError::DayOutOfRange { day, month: month + 1, year, max_day });
        }
        Ok(Self { year, month, day })
    }

    pub fn is_valid(&self) -> bool {
        self.month <= 11 && self.day >= 1 && self.day <= days_in_month(self.month, self.year)
    }

    pub fn today() -> Self {
        Self::from(Local::now().date_naive())
    }

    /// `None` for unrepresentable dates or years outside chrono's range.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, self.day)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(d: NaiveDate) -> Self {
        Self { year: d.year(), month: d.month0(), day: d.day() }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month + 1, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self::from)
            .map_err(|e| PickerError::InvalidDate(format!("{s:?}: {e}")))
    }
}

impl From<CalendarDate> for String {
    fn from(d: CalendarDate) -> Self { d.to_string() }
}

impl TryFrom<String> for CalendarDate {
    type Error = PickerError;

    fn try_from(s: String) -> Result<Self, Self::Error> { s.parse() }
}
