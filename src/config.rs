use std::path::Path;

use almanac_calendar::{Clock, Date, FixedClock, SystemClock};
use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG: &str = "almanac.toml";

/// Top-level Almanac configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlmanacConfig {
    /// Demo offsets.
    #[serde(default)]
    pub demo: DemoToml,

    /// Clock settings.
    #[serde(default)]
    pub clock: ClockToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DemoToml {
    #[serde(default = "default_forward_days")]
    pub forward_days: i64,
    #[serde(default = "default_back_days")]
    pub back_days: i64,
}

impl Default for DemoToml {
    fn default() -> Self {
        Self {
            forward_days: default_forward_days(),
            back_days: default_back_days(),
        }
    }
}

fn default_forward_days() -> i64 {
    10
}
fn default_back_days() -> i64 {
    25
}

/// Clock specification: the system clock unless `fixed` is set.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClockToml {
    pub fixed: Option<FixedDateToml>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixedDateToml {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl ClockToml {
    /// Builds the clock described by this section.
    pub fn build(&self) -> Result<Box<dyn Clock>> {
        match self.fixed {
            Some(fixed) => fixed_clock(Date::new(fixed.day, fixed.month, fixed.year)),
            None => Ok(Box::new(SystemClock)),
        }
    }
}

/// Builds a clock stopped at `date`.
pub fn fixed_clock(date: Date) -> Result<Box<dyn Clock>> {
    let naive = date
        .to_naive()
        .with_context(|| format!("fixed clock date {date} is not a calendar day"))?;
    Ok(Box::new(FixedClock::new(naive)))
}

/// Loads configuration from `path`, or from [`DEFAULT_CONFIG`] if it exists.
///
/// An explicit path must exist. Without one, a missing default file yields
/// the built-in defaults.
pub fn load(path: Option<&Path>) -> Result<AlmanacConfig> {
    load_with_default(path, Path::new(DEFAULT_CONFIG))
}

fn load_with_default(path: Option<&Path>, default: &Path) -> Result<AlmanacConfig> {
    let path = match path {
        Some(p) => p,
        None if default.exists() => default,
        None => {
            debug!(path = %default.display(), "no config file found, using defaults");
            return Ok(AlmanacConfig::default());
        }
    };

    info!(path = %path.display(), "loading config");
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: AlmanacConfig =
        toml::from_str(&toml_str).context("failed to parse TOML config")?;
    Ok(config)
}
