//! Error types for the almanac-calendar crate.

/// Error type for all fallible operations in the almanac-calendar crate.
///
/// A [`Date`](crate::Date) is never validated when it is built, so every
/// variant surfaces later, when arithmetic or formatting hands the stored
/// triple to the Gregorian calendar.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a (day, month, year) triple is not a real calendar day.
    #[error("invalid date: {day:02}.{month:02}.{year} is not a Gregorian calendar day")]
    InvalidDate {
        /// The stored day.
        day: u32,
        /// The stored month.
        month: u32,
        /// The stored year.
        year: i32,
    },

    /// Returned when shifting a valid date leaves the representable range.
    #[error("date out of range: {day:02}.{month:02}.{year} shifted by {days} days")]
    OutOfRange {
        /// Day of the starting date.
        day: u32,
        /// Month of the starting date.
        month: u32,
        /// Year of the starting date.
        year: i32,
        /// The signed day offset applied to the starting date. For
        /// `sub_days` this is the negated argument, saturated at `i64::MAX`.
        days: i64,
    },

    /// Returned when no month name exists for a (year, month) pair.
    #[error("invalid month: {month} in year {year} (must be 1..=12)")]
    InvalidMonth {
        /// The year the lookup was made for.
        year: i32,
        /// The invalid month number that was provided.
        month: u32,
    },
}
