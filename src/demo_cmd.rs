//! Demo command: shift today's date and compare the results.

use almanac_calendar::{Clock, Date};
use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use crate::cli::DemoArgs;
use crate::config::{self, AlmanacConfig};

/// Run the demonstration.
pub fn run(args: DemoArgs) -> Result<()> {
    let _cmd = info_span!("demo").entered();

    // 1. Load config, CLI flags override it
    let cfg = config::load(args.config.as_deref())?;
    let (clock, forward, back) = resolve(&args, &cfg)?;

    // 2. Compute and print
    for line in report(clock.as_ref(), forward, back)? {
        println!("{line}");
    }
    Ok(())
}

/// Merges CLI flags over the config: returns the clock and both offsets.
fn resolve(args: &DemoArgs, cfg: &AlmanacConfig) -> Result<(Box<dyn Clock>, i64, i64)> {
    let forward = args.forward.unwrap_or(cfg.demo.forward_days);
    let back = args.back.unwrap_or(cfg.demo.back_days);
    let clock = match &args.today {
        Some(parts) => config::fixed_clock(date_from_parts(parts)?)?,
        None => cfg.clock.build()?,
    };
    Ok((clock, forward, back))
}

/// Builds the five demo lines for `today + forward` and `(today + forward) - back`.
fn report(clock: &dyn Clock, forward: i64, back: i64) -> Result<Vec<String>> {
    let date1 = Date::today(clock);
    info!(%date1, forward, back, "starting from today");

    let date2 = (date1 + forward).with_context(|| format!("failed to add {forward} days"))?;
    let date3 = (date2 - back).with_context(|| format!("failed to subtract {back} days"))?;
    info!(%date2, %date3, "dates shifted");

    Ok(vec![
        format!("Date 1: {}", date1.to_short_date_string()),
        format!("Date 2: {}", date2.to_long_date_string()?),
        format!("Date 3: {}", date3.to_short_date_string()),
        format!("Dates are equal: {}", date1 == date2),
        format!("Dates are not equal: {}", date1 != date2),
    ])
}

/// Converts `--today DAY MONTH YEAR` values into a [`Date`].
fn date_from_parts(parts: &[i32]) -> Result<Date> {
    let &[day, month, year] = parts else {
        bail!("--today takes exactly DAY MONTH YEAR, got {} values", parts.len());
    };
    let day = u32::try_from(day).with_context(|| format!("negative day: {day}"))?;
    let month = u32::try_from(month).with_context(|| format!("negative month: {month}"))?;
    Ok(Date::new(day, month, year))
}
