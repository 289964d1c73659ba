//! Shift command: move a given date by a signed number of days.

use almanac_calendar::Date;
use anyhow::{Context, Result};
use tracing::info_span;

use crate::cli::ShiftArgs;

/// Run the shift command.
pub fn run(args: ShiftArgs) -> Result<()> {
    let _cmd = info_span!("shift", days = args.days).entered();
    let start = Date::new(args.day, args.month, args.year);
    let (short, long) = shift(start, args.days)?;
    println!("{short}");
    println!("{long}");
    Ok(())
}

fn shift(start: Date, days: i64) -> Result<(String, String)> {
    let shifted = (start + days).with_context(|| format!("cannot shift {start} by {days} days"))?;
    Ok((
        shifted.to_short_date_string(),
        shifted.to_long_date_string()?,
    ))
}
