//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::builder::RangedI64ValueParser;
use clap::{Parser, Subcommand};

use crate::commands::MAX_WINDOW_DAYS;

/// `--days` accepts 1 through `MAX_WINDOW_DAYS`
fn days_parser() -> RangedI64ValueParser<u32> {
    clap::value_parser!(u32).range(1..=i64::from(MAX_WINDOW_DAYS))
}

/// Sift - Rule-based spending analysis
#[derive(Parser)]
#[command(name = "sift")]
#[command(about = "Categorize transactions and surface spending insights", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Category config (TOML). Defaults to the data-dir override, then built-in table
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Categorize a single transaction
    Categorize {
        /// Transaction description as it appears on the statement
        #[arg(short, long)]
        description: String,

        /// Merchant name, if known
        #[arg(short, long)]
        merchant: Option<String>,

        /// Amount (positive = money out)
        #[arg(short, long, allow_hyphen_values = true)]
        amount: f64,
    },

    /// Categorize every row of a transactions CSV
    CategorizeFile {
        /// CSV with Date,Description,Merchant,Amount[,Category]
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Compare the latest window against the one before it
    Insights {
        /// Transactions CSV
        #[arg(short, long)]
        file: PathBuf,

        /// End of the current window (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        as_of: Option<String>,

        /// Window length in days
        #[arg(long, default_value = "30", value_parser = days_parser())]
        days: u32,
    },

    /// List likely subscription charges
    Subscriptions {
        /// Transactions CSV
        #[arg(short, long)]
        file: PathBuf,

        /// End of the window (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        as_of: Option<String>,

        /// Window length in days
        #[arg(long, default_value = "90", value_parser = days_parser())]
        days: u32,
    },

    /// Evaluate month-to-date spending against budgets
    Budgets {
        /// Transactions CSV
        #[arg(short, long)]
        file: PathBuf,

        /// Budgets CSV with Category,Monthly Limit
        #[arg(short, long)]
        budgets: PathBuf,

        /// Evaluation date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        as_of: Option<String>,
    },

    /// Show spending by category
    Breakdown {
        /// Transactions CSV
        #[arg(short, long)]
        file: PathBuf,

        /// End of the window (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        as_of: Option<String>,

        /// Window length in days
        #[arg(long, default_value = "30", value_parser = days_parser())]
        days: u32,
    },

    /// Suggest ways to save
    Recommend {
        /// Transactions CSV
        #[arg(short, long)]
        file: PathBuf,

        /// End of the window (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        as_of: Option<String>,

        /// Window length in days
        #[arg(long, default_value = "30", value_parser = days_parser())]
        days: u32,
    },

    /// Show the active category keyword table in precedence order
    Categories,
}
