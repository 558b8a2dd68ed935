//! Subscription command implementation

use std::path::Path;

use anyhow::Result;
use sift_core::{EngineConfig, Period, SubscriptionDetector, SubscriptionSummary};

use super::{check_days, load_file, print_json, resolve_as_of, truncate};

pub fn cmd_subscriptions(
    config: &EngineConfig,
    file: &Path,
    as_of: Option<&str>,
    days: u32,
    json: bool,
) -> Result<()> {
    check_days(days)?;
    let as_of = resolve_as_of(as_of)?;
    let transactions = load_file(file, config)?;
    let window = Period::trailing(as_of, days).filter(&transactions);

    let detector = SubscriptionDetector::new(config.subscriptions.clone());
    let found = detector.detect(&window);
    let summary = SubscriptionSummary::from_candidates(&found);

    if json {
        return print_json(&summary);
    }

    if summary.subscriptions.is_empty() {
        println!("No subscription charges found in the last {} days.", days);
        return Ok(());
    }

    println!();
    println!("📋 Likely Subscriptions (last {} days)", days);
    println!("   ─────────────────────────────────────────────────────────────");

    for sub in &summary.subscriptions {
        println!(
            "   {:30} │ {:>8} │ {} │ {}",
            truncate(&sub.description, 30),
            format!("${:.2}", sub.amount),
            sub.last_charged,
            sub.category
        );
    }

    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   {} charges │ ${:.2}/month │ ${:.2}/year",
        summary.total_subscriptions, summary.monthly_cost, summary.annual_cost
    );

    Ok(())
}
