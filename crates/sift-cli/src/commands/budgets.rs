//! Budget command implementation

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use sift_core::{evaluate_budgets, parse_budgets, BudgetStatus, EngineConfig, Period};

use super::{load_file, print_json, resolve_as_of, truncate};

pub fn cmd_budgets(
    config: &EngineConfig,
    file: &Path,
    budgets_file: &Path,
    as_of: Option<&str>,
    json: bool,
) -> Result<()> {
    let as_of = resolve_as_of(as_of)?;
    let transactions = load_file(file, config)?;

    let reader = File::open(budgets_file)
        .with_context(|| format!("Failed to open {}", budgets_file.display()))?;
    let budgets = parse_budgets(reader)
        .with_context(|| format!("Failed to read budgets from {}", budgets_file.display()))?;

    let month = Period::month_to_date(as_of).filter(&transactions);
    let reports = evaluate_budgets(&budgets, &month, as_of);

    if json {
        return print_json(&reports);
    }

    if reports.is_empty() {
        println!("No budgets defined in {}", budgets_file.display());
        return Ok(());
    }

    println!();
    println!("💵 Budgets as of {} (day {})", as_of, reports[0].days_into_month);
    println!("   ─────────────────────────────────────────────────────────────────────────");

    for report in &reports {
        let icon = match report.status {
            BudgetStatus::Under => "✅",
            BudgetStatus::Approaching => "⚠️ ",
            BudgetStatus::Over => "🚨",
        };
        println!(
            "   {} {:20} │ {:>10} / {:>10} │ {:>5.1}% │ projected {:>10}",
            icon,
            truncate(&report.category, 20),
            format!("${:.2}", report.amount_spent),
            format!("${:.2}", report.budget_limit),
            report.percentage_used,
            format!("${:.2}", report.projected_monthly_spend)
        );
        println!("      {}", report.message);
    }

    Ok(())
}
