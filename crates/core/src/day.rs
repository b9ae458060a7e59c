//! Calendar days.
//!
//! A [`Day`] is a `(year, month, day)` triple with no time-of-day and no
//! timezone. All cycle arithmetic works on these values, so daylight-saving
//! transitions and local offsets can never move a day boundary.
//!
//! Days cross every external boundary as `YYYY-MM-DD` text.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

const FORMAT: &str = "%Y-%m-%d";

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A timezone-agnostic calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Day(NaiveDate);

impl Day {
    /// Parse a strict `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDateFormat`] when the text does not have
    /// exactly that shape or names a day that does not exist.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || CoreError::InvalidDateFormat {
            input: text.to_string(),
        };

        let bytes = text.as_bytes();
        let well_formed = bytes.len() == 10
            && bytes.iter().enumerate().all(|(i, b)| match i {
                4 | 7 => *b == b'-',
                _ => b.is_ascii_digit(),
            });
        if !well_formed {
            return Err(invalid());
        }

        NaiveDate::parse_from_str(text, FORMAT)
            .map(Self)
            .map_err(|_| invalid())
    }

    /// Build a day from its components.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDateFormat`] for a month or day that is out
    /// of range.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| CoreError::InvalidDateFormat {
                input: format!("{year:04}-{month:02}-{day:02}"),
            })
    }

    /// Today's calendar day on the UTC clock.
    pub fn today() -> Self {
        Self(Utc::now().date_naive())
    }

    /// Format as `YYYY-MM-DD`.
    pub fn format(self) -> String {
        self.0.format(FORMAT).to_string()
    }

    /// The day `n` days later (earlier when `n` is negative).
    ///
    /// Saturates at the first or last representable day.
    pub fn add_days(self, n: i64) -> Self {
        self.checked_add_days(n).unwrap_or(if n < 0 {
            Self(NaiveDate::MIN)
        } else {
            Self(NaiveDate::MAX)
        })
    }

    /// The day `n` days later, or `None` when it falls outside the
    /// representable range.
    pub fn checked_add_days(self, n: i64) -> Option<Self> {
        self.0.checked_add_signed(Duration::try_days(n)?).map(Self)
    }

    /// Whole days from `self` to `other`; positive when `other` is later.
    pub fn days_until(self, other: Day) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Whether both values name the same calendar day.
    pub fn is_same_day(self, other: Day) -> bool {
        self == other
    }

    /// Calendar year.
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Month, 1..=12.
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Day of the month, 1..=31.
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Day of the week counted from Sunday (0) to Saturday (6).
    pub fn weekday_from_sunday(self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    /// First day of this day's month.
    pub fn first_of_month(self) -> Self {
        self.add_days(-i64::from(self.0.day0()))
    }

    /// Last day of this day's month.
    pub fn last_of_month(self) -> Self {
        // Day 32 of any month lands inside the following month.
        let probe = self.first_of_month().add_days(32);
        probe.first_of_month().add_days(-1)
    }
}

/// Number of days in `month` of `year`.
///
/// # Errors
///
/// Returns [`CoreError::InvalidDateFormat`] when `month` is not 1..=12.
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    Ok(Day::from_ymd(year, month, 1)?.last_of_month().day())
}

/// English name of a month, 1..=12.
pub fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTH_NAMES.get(index).copied()
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}

impl FromStr for Day {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Day {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Day> for String {
    fn from(day: Day) -> Self {
        day.format()
    }
}
