use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Almanac calendar date utility.
#[derive(Parser)]
#[command(
    name = "almanac",
    version,
    about = "Calendar date arithmetic and formatting"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Shift today's date forward and back and print the results.
    Demo(DemoArgs),
    /// Shift a given date by a number of days.
    Shift(ShiftArgs),
}

/// Arguments for the `demo` subcommand.
#[derive(clap::Args)]
pub struct DemoArgs {
    /// Path to TOML configuration file (defaults to `almanac.toml` if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the number of days added to today.
    #[arg(short, long, allow_negative_numbers = true)]
    pub forward: Option<i64>,

    /// Override the number of days subtracted from the shifted date.
    #[arg(short, long, allow_negative_numbers = true)]
    pub back: Option<i64>,

    /// Use a fixed date instead of the system clock.
    #[arg(
        long,
        num_args = 3,
        value_names = ["DAY", "MONTH", "YEAR"],
        allow_negative_numbers = true
    )]
    pub today: Option<Vec<i32>>,
}

/// Arguments for the `shift` subcommand.
#[derive(clap::Args)]
pub struct ShiftArgs {
    /// Day of the month.
    pub day: u32,

    /// Month (1..=12).
    pub month: u32,

    /// Year.
    #[arg(allow_negative_numbers = true)]
    pub year: i32,

    /// Signed number of days to shift by.
    #[arg(allow_negative_numbers = true)]
    pub days: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_demo_defaults() {
        let cli = Cli::try_parse_from(["almanac", "demo"]).unwrap();
        assert_eq!(cli.verbose, 0);
        let Command::Demo(args) = cli.command else {
            panic!("expected demo");
        };
        assert!(args.config.is_none());
        assert!(args.forward.is_none());
        assert!(args.back.is_none());
        assert!(args.today.is_none());
    }

    #[test]
    fn parse_demo_overrides() {
        let cli = Cli::try_parse_from([
            "almanac", "-vv", "demo", "--forward", "-3", "--back", "7", "--today", "15", "10",
            "2026",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Command::Demo(args) = cli.command else {
            panic!("expected demo");
        };
        assert_eq!(args.forward, Some(-3));
        assert_eq!(args.back, Some(7));
        assert_eq!(args.today, Some(vec![15, 10, 2026]));
    }

    #[test]
    fn parse_shift_negative() {
        let cli = Cli::try_parse_from(["almanac", "shift", "1", "3", "2024", "-1"]).unwrap();
        let Command::Shift(args) = cli.command else {
            panic!("expected shift");
        };
        assert_eq!((args.day, args.month, args.year, args.days), (1, 3, 2024, -1));
    }

    #[test]
    fn today_needs_three_values() {
        assert!(Cli::try_parse_from(["almanac", "demo", "--today", "15", "10"]).is_err());
    }
}
