mod app;
mod config;
mod render;

use anyhow::{Context, Result};
use calmon_core::{EventStore, MonthGrid, Session};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "calmon")]
#[command(about = "A month-view calendar with per-day events, in your terminal")]
struct Cli {
    /// Date whose month opens first (defaults to today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    anchor: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one month's grid and exit
    Month {
        /// Month to print (e.g., "2024-02"), defaults to the current month
        month: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let today = Local::now().date_naive();

    match cli.command {
        Some(Commands::Month { month }) => cmd_month(month.as_deref(), today),
        None => {
            let anchor = match cli.anchor.as_deref() {
                Some(raw) => parse_date(raw)?,
                None => today,
            };
            let config = config::load_or_init()?;
            app::run(Session::new(anchor), &config)
        }
    }
}

fn cmd_month(month: Option<&str>, today: NaiveDate) -> Result<()> {
    let anchor = match month {
        Some(raw) => parse_month(raw)?,
        None => today,
    };
    let grid = MonthGrid::of(anchor);
    let store = EventStore::new();
    println!("{}", render::render_month(&grid, &store, today));
    Ok(())
}

fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", input))
}

/// Parses "YYYY-MM" by anchoring it to the first of the month.
fn parse_month(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", input.trim()), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", input))
}
