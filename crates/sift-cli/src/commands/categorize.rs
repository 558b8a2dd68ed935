//! Categorization command implementations

use std::path::Path;

use anyhow::Result;
use serde_json::json;
use sift_core::{Categorizer, EngineConfig, TransactionInput};

use super::{load_file, print_json, truncate};

pub fn cmd_categorize(
    config: &EngineConfig,
    description: &str,
    merchant: Option<&str>,
    amount: f64,
    json: bool,
) -> Result<()> {
    if description.trim().is_empty() {
        anyhow::bail!("--description must not be empty");
    }
    if !amount.is_finite() {
        anyhow::bail!("--amount must be a finite number");
    }

    let mut input = TransactionInput::new(description, amount);
    if let Some(m) = merchant.filter(|m| !m.trim().is_empty()) {
        input = input.with_merchant(m);
    }

    let categorizer = Categorizer::new(config.categories.clone());
    let result = categorizer.categorize(&input);

    if json {
        return print_json(&result);
    }

    println!();
    println!("🏷️  {}", description);
    println!("   ─────────────────────────────────────────");
    println!("   Category:   {}", result.category);
    println!("   Confidence: {:.0}%", result.confidence * 100.0);
    println!("   Reasoning:  {}", result.reasoning);

    Ok(())
}

pub fn cmd_categorize_file(config: &EngineConfig, file: &Path, json: bool) -> Result<()> {
    let transactions = load_file(file, config)?;

    if json {
        return print_json(&transactions);
    }

    if transactions.is_empty() {
        println!("No transactions found in {}", file.display());
        return Ok(());
    }

    println!();
    println!("🏷️  Categorized {} transactions", transactions.len());
    println!("   ─────────────────────────────────────────────────────────────────────────");

    for tx in &transactions {
        let confidence = tx
            .confidence
            .map(|c| format!("{:.0}%", c * 100.0))
            .unwrap_or_else(|| "file".to_string());
        println!(
            "   {} │ {:30} │ {:>10} │ {:20} │ {:>4}",
            tx.date,
            truncate(&tx.description, 30),
            format!("${:.2}", tx.amount),
            truncate(&tx.category, 20),
            confidence
        );
    }

    Ok(())
}

pub fn cmd_categories(config: &EngineConfig, json: bool) -> Result<()> {
    if json {
        return print_json(&json!({
            "categories": config.categories.rules(),
            "subscriptions": &config.subscriptions,
        }));
    }

    println!();
    println!("📂 Categories (checked in this order)");
    println!("   ─────────────────────────────────────────────────────────────");

    for (i, rule) in config.categories.rules().iter().enumerate() {
        println!("   {:2}. {}", i + 1, rule.name);
        println!("       {}", rule.keywords.join(", "));
    }

    println!();
    println!(
        "🔁 Subscription keywords (charges under ${:.2})",
        config.subscriptions.max_amount
    );
    println!("   {}", config.subscriptions.keywords.join(", "));

    Ok(())
}
