//! Immutable Gregorian calendar date.

use std::fmt;
use std::ops::{Add, Sub};

use chrono::{Datelike, Days, NaiveDate};
use tracing::debug;

use crate::clock::Clock;
use crate::error::CalendarError;
use crate::month::month_name;

/// A calendar day in the proleptic Gregorian calendar.
///
/// The three fields are stored exactly as given and never change. Nothing is
/// validated on construction: a triple such as 31 February is accepted and
/// only rejected once arithmetic or [`to_long_date_string`] needs a real
/// calendar day.
///
/// [`to_long_date_string`]: Date::to_long_date_string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Date {
    day: u32,
    month: u32,
    year: i32,
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl Date {
    /// Creates a new `Date` from day, month, and year.
    pub fn new(day: u32, month: u32, year: i32) -> Self {
        Self { day, month, year }
    }

    /// Creates a `Date` for the current day as reported by `clock`.
    pub fn today<C: Clock + ?Sized>(clock: &C) -> Self {
        Self::from(clock.today())
    }

    /// Returns the day within the month.
    pub fn day(self) -> u32 {
        self.day
    }

    /// Returns the month.
    pub fn month(self) -> u32 {
        self.month
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns `true` if the stored triple is a real calendar day.
    pub fn is_valid(self) -> bool {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).is_some()
    }

    /// Converts to a [`NaiveDate`].
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the stored triple is not a
    /// real calendar day.
    pub fn to_naive(self) -> Result<NaiveDate, CalendarError> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or_else(|| {
            debug!(date = %self, "not a calendar day");
            CalendarError::InvalidDate {
                day: self.day,
                month: self.month,
                year: self.year,
            }
        })
    }

    /// Returns the date `days` days later (earlier when `days` is negative).
    ///
    /// Month and year rollover and leap years are handled by the calendar.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if `self` is not a real calendar
    /// day, or [`CalendarError::OutOfRange`] if the result is not
    /// representable.
    pub fn add_days(self, days: i64) -> Result<Self, CalendarError> {
        self.shift(days >= 0, days.unsigned_abs(), days)
    }

    /// Returns the date `days` days earlier (later when `days` is negative).
    ///
    /// Equivalent to `add_days(-days)`, including for `i64::MIN`.
    ///
    /// # Errors
    ///
    /// Same as [`Date::add_days`].
    pub fn sub_days(self, days: i64) -> Result<Self, CalendarError> {
        self.shift(days < 0, days.unsigned_abs(), days.saturating_neg())
    }

    fn shift(self, forward: bool, magnitude: u64, days: i64) -> Result<Self, CalendarError> {
        let start = self.to_naive()?;
        let shifted = if forward {
            start.checked_add_days(Days::new(magnitude))
        } else {
            start.checked_sub_days(Days::new(magnitude))
        };
        shifted.map(Self::from).ok_or_else(|| {
            debug!(date = %self, days, "shift left the calendar range");
            CalendarError::OutOfRange {
                day: self.day,
                month: self.month,
                year: self.year,
                days,
            }
        })
    }

    /// Formats as `DD.MM.YYYY`.
    ///
    /// Day and month are padded to two digits and the year to four. A
    /// negative year keeps its sign in front of the padded digits, so year
    /// -7 renders as `-0007`.
    pub fn to_short_date_string(self) -> String {
        let year = if self.year < 0 {
            format!("-{:04}", self.year.unsigned_abs())
        } else {
            format!("{:04}", self.year)
        };
        format!("{:02}.{:02}.{year}", self.day, self.month)
    }

    /// Formats as `<MonthName> <Day>, <Year>`, e.g. `March 5, 2024`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if the calendar has no month
    /// name for the stored (year, month).
    pub fn to_long_date_string(self) -> Result<String, CalendarError> {
        let name = month_name(self.year, self.month)?;
        Ok(format!("{name} {}, {}", self.day, self.year))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.day(), date.month(), date.year())
    }
}

impl TryFrom<Date> for NaiveDate {
    type Error = CalendarError;

    fn try_from(date: Date) -> Result<Self, Self::Error> {
        date.to_naive()
    }
}

impl Add<i64> for Date {
    type Output = Result<Date, CalendarError>;

    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Result<Date, CalendarError>;

    fn sub(self, days: i64) -> Self::Output {
        self.sub_days(days)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_short_date_string())
    }
}
