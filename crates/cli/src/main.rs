//! Wedding Countdown CLI - one-shot countdown queries

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::sync::Arc;
use tabled::{Table, Tabled};

use wedding_countdown_core::application::constants::{DEFAULT_TARGET, ENV_TARGET};
use wedding_countdown_core::domain::{format_two_digits, parse_instant, EXPIRED_BANNER};
use wedding_countdown_core::port::{FixedTimeProvider, SystemTimeProvider, TimeProvider};
use wedding_countdown_core::{CountdownEngine, TargetInstant, TimeRemaining};

#[derive(Parser)]
#[command(name = "wedding-countdown-cli")]
#[command(about = "Wedding Countdown CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Target instant, RFC 3339 with an explicit UTC offset
    #[arg(long, global = true, env = ENV_TARGET, default_value = DEFAULT_TARGET)]
    target: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the time left until the target
    Remaining {
        /// Evaluate at this instant instead of the system clock (RFC 3339)
        #[arg(long)]
        now: Option<String>,

        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Describe the target instant
    Target,
}

#[derive(Tabled)]
struct BreakdownRow {
    days: u64,
    hours: String,
    minutes: String,
    seconds: String,
    state: String,
}

impl From<&TimeRemaining> for BreakdownRow {
    fn from(remaining: &TimeRemaining) -> Self {
        Self {
            days: remaining.days,
            hours: format_two_digits(remaining.hours.into()),
            minutes: format_two_digits(remaining.minutes.into()),
            seconds: format_two_digits(remaining.seconds.into()),
            state: remaining.state().to_string(),
        }
    }
}

#[derive(Tabled)]
struct TargetRow {
    field: &'static str,
    value: String,
}

/// Snapshot from a one-off engine on the chosen clock
fn remaining_at(target: TargetInstant, now: Option<&str>) -> Result<TimeRemaining> {
    let clock: Arc<dyn TimeProvider> = match now {
        Some(raw) => {
            let now = parse_instant(raw).with_context(|| format!("Invalid --now value {raw:?}"))?;
            Arc::new(FixedTimeProvider::new(now.timestamp_millis()))
        }
        None => Arc::new(SystemTimeProvider),
    };
    Ok(CountdownEngine::new(target, clock).remaining())
}

fn target_rows(target: &TargetInstant, now: &chrono::DateTime<chrono::Utc>) -> Vec<TargetRow> {
    vec![
        TargetRow {
            field: "Target",
            value: target.to_string(),
        },
        TargetRow {
            field: "UTC",
            value: target.utc().to_rfc3339(),
        },
        TargetRow {
            field: "Wedding Date",
            value: target.display_date(),
        },
        TargetRow {
            field: "Now (target zone)",
            value: target.to_target_zone(now).to_rfc3339(),
        },
        TargetRow {
            field: "In future",
            value: if target.is_in_future(now) { "yes" } else { "no" }.to_string(),
        },
    ]
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let target = TargetInstant::parse(&cli.target)
        .with_context(|| format!("Invalid --target value {:?}", cli.target))?;

    match cli.command {
        Commands::Remaining { now, json } => {
            let remaining = remaining_at(target, now.as_deref())?;

            if json {
                println!("{}", serde_json::to_string_pretty(&remaining)?);
                return Ok(());
            }

            if remaining.is_expired {
                println!("{}", EXPIRED_BANNER.green().bold());
            } else {
                println!(
                    "{}",
                    format!("Counting down to {}", target.display_date())
                        .cyan()
                        .bold()
                );
            }
            println!();
            println!("{}", Table::new(vec![BreakdownRow::from(&remaining)]));
        }

        Commands::Target => {
            let now = chrono::Utc::now();
            println!("{}", "Target Instant".cyan().bold());
            println!();
            println!("{}", Table::new(target_rows(&target, &now)));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn wedding() -> TargetInstant {
        TargetInstant::parse(DEFAULT_TARGET).unwrap()
    }

    #[test]
    fn test_remaining_at_fixed_now() {
        let r = remaining_at(wedding(), Some("2025-12-10T15:58:30+08:00")).unwrap();
        assert_eq!((r.minutes, r.seconds, r.is_expired), (1, 30, false));

        let row = BreakdownRow::from(&r);
        assert_eq!(row.minutes, "01");
        assert_eq!(row.seconds, "30");
        assert_eq!(row.state, "COUNTING");
    }

    #[test]
    fn test_remaining_at_rejects_offsetless_now() {
        let err = remaining_at(wedding(), Some("2025-12-10T15:58:30")).unwrap_err();
        assert!(err.to_string().contains("--now"));
    }

    #[test]
    fn test_target_rows() {
        let now = chrono::Utc.with_ymd_and_hms(2025, 12, 1, 0, 0, 0).unwrap();
        let rows = target_rows(&wedding(), &now);
        let value = |field: &str| {
            rows.iter()
                .find(|row| row.field == field)
                .map(|row| row.value.clone())
                .unwrap()
        };
        assert_eq!(value("UTC"), "2025-12-10T08:00:00+00:00");
        assert_eq!(value("Wedding Date"), "December 10, 2025");
        assert_eq!(value("Now (target zone)"), "2025-12-01T08:00:00+08:00");
        assert_eq!(value("In future"), "yes");
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from([
            "wedding-countdown-cli",
            "remaining",
            "--now",
            "2025-12-09T16:00:00+08:00",
            "--json",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Remaining { now: Some(_), json: true }
        ));
    }
}
