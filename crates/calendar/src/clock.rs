//! Source of the current local date.

use chrono::{Local, NaiveDate};

/// Provides "today" to [`Date::today`](crate::Date::today).
///
/// Keeping the wall clock behind this trait leaves `Date` a pure value type:
/// tests and callers that need a deterministic day pass a [`FixedClock`].
pub trait Clock: Send + Sync {
    /// Returns the current calendar date.
    fn today(&self) -> NaiveDate;
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    /// Creates a clock that is stopped at `date`.
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }
}
