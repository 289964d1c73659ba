//! # almanac-calendar
//!
//! Immutable Gregorian calendar dates with day arithmetic, backed by `chrono`.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Clock"] -->|"Date::today()"| B["Date"]
//!     C["(day, month, year)"] -->|"Date::new()"| B
//!     B -->|"+ n / - n"| D["Result of Date"]
//!     B -->|".to_short_date_string()"| E["DD.MM.YYYY"]
//!     B -->|".to_long_date_string()"| F["Month D, YYYY"]
//!     F -.->|"month_name()"| G["chrono::Month"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use almanac_calendar::{Date, SystemClock};
//!
//! let start = Date::new(1, 1, 2024);
//! let later = (start + 31).unwrap(); // 01.02.2024
//! assert_eq!(later.to_short_date_string(), "01.02.2024");
//! assert_eq!(later.to_long_date_string().unwrap(), "February 1, 2024");
//!
//! let today = Date::today(&SystemClock);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | The `Date` value type and its operators |
//! | `clock` | Injectable source of the current date |
//! | `month` | Month-name lookup |
//! | `error` | Error types |

mod clock;
mod date;
mod error;
mod month;

pub use clock::{Clock, FixedClock, SystemClock};
pub use date::Date;
pub use error::CalendarError;
pub use month::month_name;
