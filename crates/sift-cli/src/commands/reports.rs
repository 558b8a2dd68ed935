//! Report command implementations (breakdown, recommendations)

use std::path::Path;

use anyhow::Result;
use sift_core::{category_breakdown, recommend, EngineConfig, Period, SubscriptionDetector};

use super::{check_days, load_file, print_json, resolve_as_of, truncate};

pub fn cmd_breakdown(
    config: &EngineConfig,
    file: &Path,
    as_of: Option<&str>,
    days: u32,
    json: bool,
) -> Result<()> {
    check_days(days)?;
    let as_of = resolve_as_of(as_of)?;
    let transactions = load_file(file, config)?;
    let period = Period::trailing(as_of, days);
    let breakdown = category_breakdown(&period.filter(&transactions));

    if json {
        return print_json(&breakdown);
    }

    println!();
    println!("📊 Spending by Category: {} to {}", period.start, as_of);
    println!("   ─────────────────────────────────────────────────────────────");

    if breakdown.categories.is_empty() {
        println!("   No spending in this period");
        return Ok(());
    }

    for cat in &breakdown.categories {
        let bar_len = (cat.percentage_of_total / 5.0).round() as usize;
        let bar = "█".repeat(bar_len);
        println!(
            "   {:20} │ {:>10} │ {:>3} tx │ {:>5.1}% {}",
            truncate(&cat.category, 20),
            format!("${:.2}", cat.total_spent),
            cat.transaction_count,
            cat.percentage_of_total,
            bar
        );
    }

    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   {:20} │ {:>10} │ {:>3} tx",
        "Total",
        format!("${:.2}", breakdown.total_spent),
        breakdown.total_transactions
    );

    Ok(())
}

pub fn cmd_recommend(
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
    let set = recommend(&window, &detector);

    if json {
        return print_json(&set);
    }

    if set.recommendations.is_empty() {
        println!("✨ No recommendations right now. Spending looks reasonable.");
        return Ok(());
    }

    println!();
    println!("💰 Recommendations");
    println!("   ─────────────────────────────────────────────────────────────");

    for rec in &set.recommendations {
        println!(
            "   {} [{}, {} effort, {} priority]",
            rec.title,
            rec.kind.as_str(),
            rec.effort.as_str(),
            rec.priority
        );
        println!("      {}", rec.description);
        println!("      Potential savings: ${:.2}", rec.potential_savings);
    }

    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   Total potential savings: ${:.2}",
        set.total_potential_savings
    );

    Ok(())
}
