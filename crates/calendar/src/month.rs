//! Month-name lookup.

use chrono::{Month, NaiveDate};

use crate::error::CalendarError;

/// Returns the display name of `month` in `year`.
///
/// The first day of the month must exist in the Gregorian calendar, so both
/// an out-of-range month and a year outside chrono's supported range fail.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `(year, month)` does not name a
/// representable month.
///
/// # Example
///
/// ```ignore
/// assert_eq!(month_name(2024, 2).unwrap(), "February");
/// ```
pub fn month_name(year: i32, month: u32) -> Result<&'static str, CalendarError> {
    let invalid = || CalendarError::InvalidMonth { year, month };
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let month = u8::try_from(month).map_err(|_| invalid())?;
    Month::try_from(month)
        .map(|m| m.name())
        .map_err(|_| invalid())
}
