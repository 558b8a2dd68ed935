//! Shared command utilities
//!
//! This module contains:
//! - `load_config` - Resolve the keyword tables (flag, data dir, built-in)
//! - `load_file` - Read and categorize a transactions CSV
//! - `resolve_as_of` - Parse `--as-of` or fall back to today
//! - `print_json` - Pretty-print a serializable result

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use sift_core::{load_transactions, CategorizedTransaction, Categorizer, EngineConfig};
use tracing::{debug, info};

/// Load engine config from an explicit path, the data-dir override, or the built-in table
pub fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    let config = EngineConfig::load(path).context("Failed to load category config")?;
    debug!(
        categories = config.categories.len(),
        subscription_keywords = config.subscriptions.keywords.len(),
        "Loaded config"
    );
    Ok(config)
}

/// Read a transactions CSV, categorizing rows that have no category
pub fn load_file(path: &Path, config: &EngineConfig) -> Result<Vec<CategorizedTransaction>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let categorizer = Categorizer::new(config.categories.clone());
    let transactions = load_transactions(file, &categorizer)
        .with_context(|| format!("Failed to read transactions from {}", path.display()))?;
    info!(count = transactions.len(), file = %path.display(), "Loaded transactions");
    Ok(transactions)
}

/// Parse `--as-of`, defaulting to today's local date
pub fn resolve_as_of(as_of: Option<&str>) -> Result<NaiveDate> {
    match as_of {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .context("Invalid --as-of date format (use YYYY-MM-DD)"),
        None => Ok(Local::now().date_naive()),
    }
}

/// Longest analysis window accepted by `--days` (about ten years)
pub const MAX_WINDOW_DAYS: u32 = 3650;

/// Window length must be between one day and `MAX_WINDOW_DAYS`
pub fn check_days(days: u32) -> Result<()> {
    if !(1..=MAX_WINDOW_DAYS).contains(&days) {
        anyhow::bail!("--days must be between 1 and {}", MAX_WINDOW_DAYS);
    }
    Ok(())
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
