//! Spending breakdown by category

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{category, CategorizedTransaction};

/// Aggregate spend for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpending {
    pub category: String,
    pub total_spent: f64,
    pub transaction_count: usize,
    pub average_amount: f64,
    /// Highest categorizer confidence seen in this category (0 if unknown)
    pub confidence_score: f64,
    pub largest_transaction: f64,
    pub percentage_of_total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingBreakdown {
    pub total_spent: f64,
    pub total_transactions: usize,
    /// Sorted by total spent, largest first
    pub categories: Vec<CategorySpending>,
}

/// Group transactions by category using absolute amounts
pub fn category_breakdown(transactions: &[CategorizedTransaction]) -> SpendingBreakdown {
    let mut by_category: HashMap<&str, CategorySpending> = HashMap::new();
    let mut total_spent = 0.0;

    for tx in transactions {
        let name = if tx.category.trim().is_empty() {
            category::OTHER
        } else {
            tx.category.as_str()
        };
        let amount = tx.amount.abs();
        total_spent += amount;

        let entry = by_category
            .entry(name)
            .or_insert_with(|| CategorySpending {
                category: name.to_string(),
                total_spent: 0.0,
                transaction_count: 0,
                average_amount: 0.0,
                confidence_score: 0.0,
                largest_transaction: 0.0,
                percentage_of_total: 0.0,
            });
        entry.total_spent += amount;
        entry.transaction_count += 1;
        entry.confidence_score = entry.confidence_score.max(tx.confidence.unwrap_or(0.0));
        entry.largest_transaction = entry.largest_transaction.max(amount);
    }

    let mut categories: Vec<CategorySpending> = by_category
        .into_values()
        .map(|mut c| {
            c.average_amount = c.total_spent / c.transaction_count as f64;
            c.percentage_of_total = if total_spent > 0.0 {
                c.total_spent / total_spent * 100.0
            } else {
                0.0
            };
            c
        })
        .collect();

    // Ties broken by name so output is stable
    categories.sort_by(|a, b| {
        b.total_spent
            .partial_cmp(&a.total_spent)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.category.cmp(&b.category))
    });

    SpendingBreakdown {
        total_spent,
        total_transactions: transactions.len(),
        categories,
    }
}
