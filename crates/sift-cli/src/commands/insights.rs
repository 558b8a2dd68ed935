//! Insight command implementation

use std::path::Path;

use anyhow::Result;
use serde_json::json;
use sift_core::{split_windows, EngineConfig, InsightGenerator, InsightKind, Period, Priority};

use super::{check_days, load_file, print_json, resolve_as_of};

pub fn cmd_insights(
    config: &EngineConfig,
    file: &Path,
    as_of: Option<&str>,
    days: u32,
    json: bool,
) -> Result<()> {
    check_days(days)?;
    let as_of = resolve_as_of(as_of)?;
    let transactions = load_file(file, config)?;

    let (current, previous) = split_windows(&transactions, as_of, days);
    let insights = InsightGenerator::new().generate(&current, &previous);

    if json {
        return print_json(&json!({
            "insights": insights,
            "transactions_analyzed": {
                "current_period": current.len(),
                "previous_period": previous.len(),
            },
        }));
    }

    let window = Period::trailing(as_of, days);
    println!();
    println!(
        "💡 Insights for {} to {} ({} vs {} transactions)",
        window.start,
        as_of,
        current.len(),
        previous.len()
    );
    println!("   ─────────────────────────────────────────────────────────────");

    if insights.is_empty() {
        println!("   ✨ Nothing notable this period");
        return Ok(());
    }

    for insight in &insights {
        let icon = match insight.kind {
            InsightKind::Overspending => "⚠️ ",
            InsightKind::Trend => "📈",
            InsightKind::Recommendation => "💰",
            InsightKind::Alert => "🔔",
        };
        let priority = match insight.priority {
            Priority::High => "high",
            Priority::Medium => "med",
            Priority::Low => "low",
        };
        println!("   {} {} [{}]", icon, insight.title, priority);
        println!("      {}", insight.message);
    }

    Ok(())
}
