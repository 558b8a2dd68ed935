//! Sift CLI - Rule-based spending analysis
//!
//! Usage:
//!   sift categorize -d "STARBUCKS #123" -a 5.75   Categorize one transaction
//!   sift insights --file tx.csv                   Compare this month to last
//!   sift subscriptions --file tx.csv              Find recurring charges
//!   sift budgets --file tx.csv --budgets b.csv    Check budgets

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Logs go to stderr so --json output stays clean
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    let config = commands::load_config(cli.config.as_deref())?;
    let json = cli.json;

    match cli.command {
        Commands::Categorize {
            description,
            merchant,
            amount,
        } => commands::cmd_categorize(&config, &description, merchant.as_deref(), amount, json),
        Commands::CategorizeFile { file } => commands::cmd_categorize_file(&config, &file, json),
        Commands::Insights { file, as_of, days } => {
            commands::cmd_insights(&config, &file, as_of.as_deref(), days, json)
        }
        Commands::Subscriptions { file, as_of, days } => {
            commands::cmd_subscriptions(&config, &file, as_of.as_deref(), days, json)
        }
        Commands::Budgets {
            file,
            budgets,
            as_of,
        } => commands::cmd_budgets(&config, &file, &budgets, as_of.as_deref(), json),
        Commands::Breakdown { file, as_of, days } => {
            commands::cmd_breakdown(&config, &file, as_of.as_deref(), days, json)
        }
        Commands::Recommend { file, as_of, days } => {
            commands::cmd_recommend(&config, &file, as_of.as_deref(), days, json)
        }
        Commands::Categories => commands::cmd_categories(&config, json),
    }
}
