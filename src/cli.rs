use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Tripcal reservation calendar dashboard.
#[derive(Parser)]
#[command(
    name = "tripcal",
    version,
    about = "Reservation calendar dashboard for activity hosts"
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
    /// Render the month grid for a reservation feed.
    Render(RenderArgs),
    /// Print per-status reservation totals for a month.
    Summary(SummaryArgs),
}

/// Arguments for the `render` subcommand.
#[derive(clap::Args)]
pub struct RenderArgs {
    /// Target year.
    #[arg(short, long)]
    pub year: i32,

    /// Target month (1-12).
    #[arg(short, long)]
    pub month: u32,

    /// Path to the reservation feed JSON file.
    #[arg(short, long)]
    pub feed: PathBuf,

    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "tripcal.toml")]
    pub config: PathBuf,

    /// Override "today" (YYYY-MM-DD) for the past-reservation indicator.
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

/// Arguments for the `summary` subcommand.
#[derive(clap::Args)]
pub struct SummaryArgs {
    /// Target year.
    #[arg(short, long)]
    pub year: i32,

    /// Target month (1-12).
    #[arg(short, long)]
    pub month: u32,

    /// Path to the reservation feed JSON file.
    #[arg(short, long)]
    pub feed: PathBuf,
}
