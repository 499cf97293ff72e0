//! `slots` CLI — compute bookable free slots from a schedule snapshot.
//!
//! ## Usage
//!
//! ```sh
//! # Free slots for professional 1 at establishment 1 over one week
//! slots compute -s schedule.json -e 1 -p 1 --from 2026-03-02 --to 2026-03-08
//!
//! # Snapshot on stdin
//! cat schedule.json | slots compute -e 1 -p 1 --from 2026-03-02 --to 2026-03-02
//!
//! # Earliest slot that fits a 45 minute service
//! slots first-fit -s schedule.json -e 1 -p 1 --from 2026-03-02 --to 2026-03-08 --duration 45
//!
//! # Check a requested booking for conflicts
//! slots check -s schedule.json -p 1 \
//!     --start 2026-03-02T10:00:00Z --end 2026-03-02T11:00:00Z
//! ```

use anyhow::{bail, Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use std::process;

use slot_engine::{
    compute_free_slots, find_conflicts, first_fit, InMemorySchedule, ScheduleData, Slot, SlotError,
};

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Free-slot computation for service-establishment booking"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute merged free slots per date over an inclusive range
    Compute {
        /// Schedule snapshot JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        schedule: Option<String>,
        /// Establishment id (holiday scope)
        #[arg(short, long)]
        establishment: i64,
        /// Professional id
        #[arg(short, long)]
        professional: i64,
        /// Range start, inclusive (YYYY-MM-DD)
        #[arg(long)]
        from: NaiveDate,
        /// Range end, inclusive (YYYY-MM-DD)
        #[arg(long)]
        to: NaiveDate,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Find the earliest slot that fits a service duration
    FirstFit {
        /// Schedule snapshot JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        schedule: Option<String>,
        /// Establishment id (holiday scope)
        #[arg(short, long)]
        establishment: i64,
        /// Professional id
        #[arg(short, long)]
        professional: i64,
        /// Range start, inclusive (YYYY-MM-DD)
        #[arg(long)]
        from: NaiveDate,
        /// Range end, inclusive (YYYY-MM-DD)
        #[arg(long)]
        to: NaiveDate,
        /// Service duration in minutes
        #[arg(short, long)]
        duration: i64,
    },
    /// Check a requested booking interval for conflicts
    Check {
        /// Schedule snapshot JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        schedule: Option<String>,
        /// Professional id
        #[arg(short, long)]
        professional: i64,
        /// Requested start (RFC 3339, e.g. 2026-03-02T10:00:00Z)
        #[arg(long)]
        start: DateTime<Utc>,
        /// Requested end (RFC 3339)
        #[arg(long)]
        end: DateTime<Utc>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compute {
            schedule,
            establishment,
            professional,
            from,
            to,
            output,
        } => {
            validate_range(from, to)?;
            let store = load_schedule(schedule.as_deref())?;
            let result = compute_free_slots(&store, establishment, professional, from, to)
                .context("Failed to compute free slots")?;
            let json = serde_json::to_string_pretty(&result)?;
            if let Some(path) = output {
                std::fs::write(&path, json)
                    .with_context(|| format!("Failed to write file: {}", path))?;
            } else {
                println!("{}", json);
            }
        }
        Commands::FirstFit {
            schedule,
            establishment,
            professional,
            from,
            to,
            duration,
        } => {
            validate_range(from, to)?;
            if duration <= 0 {
                bail!("--duration must be a positive number of minutes");
            }
            let store = load_schedule(schedule.as_deref())?;
            let found = first_fit(&store, establishment, professional, from, to, duration)
                .context("Failed to compute free slots")?;
            match found {
                Some(slot) => {
                    println!("{}", serde_json::to_string_pretty(&slot)?);
                }
                None => {
                    eprintln!("No free slot of {} minutes in range", duration);
                    process::exit(1);
                }
            }
        }
        Commands::Check {
            schedule,
            professional,
            start,
            end,
        } => {
            if end <= start {
                bail!("Requested interval end must be after its start");
            }
            let store = load_schedule(schedule.as_deref())?;
            let requested = Slot { start, end };
            let conflicts = find_conflicts(&store, professional, &requested)
                .context("Failed to check for conflicts")?;
            if conflicts.is_empty() {
                println!("No conflicts");
            } else {
                for c in &conflicts {
                    println!(
                        "Conflict: {} - {} ({} min overlap, {:?})",
                        c.existing.start, c.existing.end, c.overlap_minutes, c.existing.status
                    );
                }
                process::exit(1);
            }
        }
    }

    Ok(())
}

/// Reject inverted ranges before they reach the calculator; the core treats
/// range validation as a caller concern.
fn validate_range(from: NaiveDate, to: NaiveDate) -> Result<()> {
    if to < from {
        bail!(SlotError::InvalidDateRange {
            start: from,
            end: to
        });
    }
    Ok(())
}

/// Load and deserialize the schedule snapshot from a file or stdin.
fn load_schedule(path: Option<&str>) -> Result<InMemorySchedule> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            buf
        }
    };
    let data: ScheduleData =
        serde_json::from_str(&raw).context("Failed to parse schedule snapshot")?;
    Ok(InMemorySchedule::new(data))
}
