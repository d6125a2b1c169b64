//! `datemath` CLI — calendar arithmetic from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Start of the local day
//! datemath normalize 2024-02-28T15:30:00Z
//!
//! # Year/month/day distance between two days (JSON)
//! datemath diff 2024-01-01 2024-03-15
//!
//! # Start of the day, moved N days
//! datemath offset 2024-02-28T15:30:00Z 1
//!
//! # Add or subtract calendar offsets
//! datemath add 2024-01-31 --months 1 --hours 6
//! datemath sub 2024-03-01 --weeks 2
//!
//! # Whole units from OTHER to DATE
//! datemath between 2024-03-10T10:00:00Z 2024-03-10T09:00:00Z --unit minute
//!
//! # Short elapsed label ("1h", "3d", "2M", ...)
//! datemath ago 2024-03-10T10:00:00Z 2024-03-10T09:00:00Z
//!
//! # Interpret naive dates in a timezone
//! datemath --tz America/New_York normalize 2024-03-10T12:00:00
//! ```

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use datemath::{
    add_to_instant, days, days_from, diff, hours, hours_from, minutes, minutes_from, months,
    months_from, normalize, offset, offset_from, seconds, seconds_from, subtract_from_instant,
    weeks, weeks_from, years, years_from, Calendar, ComponentSet, Instant,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "datemath",
    version,
    about = "Calendar arithmetic: normalize, diff, offset and elapsed labels"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// IANA timezone of the calendar (e.g., "America/New_York")
    #[arg(long, global = true, env = "DATEMATH_TZ", default_value = "UTC")]
    tz: String,

    /// Log calendar decisions to stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the start of the local day containing DATE
    Normalize {
        date: String,
    },
    /// Print the year/month/day distance between the days of A and B as JSON
    Diff {
        a: String,
        b: String,
    },
    /// Print the start of DATE's local day moved by DAYS days
    Offset {
        date: String,
        #[arg(allow_negative_numbers = true)]
        days: i64,
    },
    /// Add calendar offsets to DATE
    Add {
        date: String,
        #[command(flatten)]
        offsets: OffsetArgs,
    },
    /// Subtract calendar offsets from DATE
    Sub {
        date: String,
        #[command(flatten)]
        offsets: OffsetArgs,
    },
    /// Print the whole number of UNITs from OTHER to DATE (negative if DATE is earlier)
    Between {
        date: String,
        other: String,
        #[arg(short, long, value_enum)]
        unit: UnitArg,
    },
    /// Print the coarsest elapsed unit from OTHER to DATE, e.g. "3d"
    Ago {
        date: String,
        other: String,
    },
}

#[derive(Args)]
struct OffsetArgs {
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    years: i64,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    months: i64,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    weeks: i64,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    days: i64,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    hours: i64,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    minutes: i64,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    seconds: i64,
}

impl OffsetArgs {
    fn components(&self) -> ComponentSet {
        years(self.years)
            + months(self.months)
            + weeks(self.weeks)
            + days(self.days)
            + hours(self.hours)
            + minutes(self.minutes)
            + seconds(self.seconds)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum UnitArg {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let calendar: Calendar = cli
        .tz
        .parse()
        .with_context(|| format!("Unknown timezone: '{}'", cli.tz))?;
    tracing::debug!(tz = calendar.timezone().name(), "calendar configured");

    match cli.command {
        Commands::Normalize { date } => {
            let date = parse_instant(&calendar, &date)?;
            let start = normalize(&calendar, date).context("Failed to normalize date")?;
            println!("{}", render(&calendar, start));
        }
        Commands::Diff { a, b } => {
            let a = parse_instant(&calendar, &a)?;
            let b = parse_instant(&calendar, &b)?;
            let delta = diff(&calendar, a, b).context("Failed to diff dates")?;
            println!("{}", serde_json::to_string(&delta)?);
        }
        Commands::Offset { date, days } => {
            let date = parse_instant(&calendar, &date)?;
            let moved = offset(&calendar, date, days).context("Failed to offset date")?;
            println!("{}", render(&calendar, moved));
        }
        Commands::Add { date, offsets } => {
            let date = parse_instant(&calendar, &date)?;
            let result = add_to_instant(&calendar, date, &offsets.components())
                .context("Failed to add offsets")?;
            println!("{}", render(&calendar, result));
        }
        Commands::Sub { date, offsets } => {
            let date = parse_instant(&calendar, &date)?;
            let result = subtract_from_instant(&calendar, date, &offsets.components())
                .context("Failed to subtract offsets")?;
            println!("{}", render(&calendar, result));
        }
        Commands::Between { date, other, unit } => {
            let date = parse_instant(&calendar, &date)?;
            let other = parse_instant(&calendar, &other)?;
            let count = match unit {
                UnitArg::Year => years_from(&calendar, date, other),
                UnitArg::Month => months_from(&calendar, date, other),
                UnitArg::Week => weeks_from(&calendar, date, other),
                UnitArg::Day => days_from(&calendar, date, other),
                UnitArg::Hour => hours_from(&calendar, date, other),
                UnitArg::Minute => minutes_from(&calendar, date, other),
                UnitArg::Second => seconds_from(&calendar, date, other),
            };
            println!("{}", count);
        }
        Commands::Ago { date, other } => {
            let date = parse_instant(&calendar, &date)?;
            let other = parse_instant(&calendar, &other)?;
            println!("{}", offset_from(&calendar, date, other));
        }
    }

    Ok(())
}

/// Install a stderr subscriber. `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Parse a command-line date.
///
/// Accepts RFC 3339 (e.g., "2024-03-10T10:00:00Z"), which names an absolute
/// instant, or naive "2024-03-10T10:00:00" / "2024-03-10", which are read as
/// local times in the calendar's timezone.
fn parse_instant(calendar: &Calendar, s: &str) -> Result<Instant> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    let local = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d").map(|d| d.and_time(NaiveTime::MIN)))
        .with_context(|| {
            format!(
                "Invalid datetime '{}': expected RFC 3339, YYYY-MM-DDTHH:MM:SS or YYYY-MM-DD",
                s
            )
        })?;
    calendar
        .resolve_local(local)
        .with_context(|| format!("Cannot place '{}' in {}", s, calendar.timezone().name()))
}

/// Format an instant as RFC 3339 in the calendar's timezone.
fn render(calendar: &Calendar, instant: Instant) -> String {
    instant.with_timezone(&calendar.timezone()).to_rfc3339()
}
