//! # gk-cli
//!
//! Command-line interface for Goalkeeper.
//!
//! Tracks recurring personal goals and records, per calendar period,
//! whether each one was completed:
//! - `gk add` — create a daily/weekly/monthly/yearly goal
//! - `gk list` — goals grouped by frequency with today's status
//! - `gk check` — mark a goal done or not done for a date
//! - `gk remind` — interactive run through every goal
//! - `gk serve` — small web dashboard over the same goals file

mod commands;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gk_core::Frequency;
use gk_store::GoalStore;

/// Goalkeeper — track recurring goals per day, week, month, and year.
#[derive(Parser)]
#[command(name = "gk", version, about)]
struct Cli {
    /// Path to the goals file (defaults to the platform data directory,
    /// or $GK_DATA_DIR when set).
    #[arg(long)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new goal.
    Add {
        /// Name of the goal.
        name: String,
        /// How often the goal repeats.
        #[arg(long, default_value = "daily")]
        frequency: Frequency,
    },
    /// Show goals grouped by frequency with today's status.
    List,
    /// Manually mark a goal done or not done.
    Check {
        /// Name of the goal.
        name: String,
        /// Frequency of the goal.
        #[arg(long, default_value = "daily")]
        frequency: Frequency,
        /// Mark as done.
        #[arg(long, conflicts_with = "not_done", required_unless_present = "not_done")]
        done: bool,
        /// Mark as not done.
        #[arg(long)]
        not_done: bool,
        /// Date to record for (YYYY-MM-DD, defaults to today).
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Run the interactive reminder over all goals.
    Remind,
    /// Start the web dashboard.
    Serve {
        /// Address to listen on.
        #[arg(long, default_value = "127.0.0.1:8080")]
        addr: String,
    },
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they don't mix with command output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("gk_core=info".parse()?)
                .add_directive("gk_store=info".parse()?)
                .add_directive("gk_cli=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    let data_file = cli
        .data_file
        .unwrap_or_else(gk_store::default_data_file);
    let store = GoalStore::new(data_file);

    match cli.command {
        Commands::Add { name, frequency } => commands::add::execute(&store, &name, frequency),
        Commands::List => commands::list::execute(&store),
        Commands::Check {
            name,
            frequency,
            done,
            not_done,
            date,
        } => commands::check::execute(&store, &name, frequency, done && !not_done, date),
        Commands::Remind => commands::remind::execute(&store),
        Commands::Serve { addr } => commands::serve::execute(store, &addr),
    }
}
