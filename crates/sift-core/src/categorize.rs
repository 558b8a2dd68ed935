//! Keyword categorizer
//!
//! Maps a single transaction to a category by scanning an ordered keyword
//! table. The first category with any keyword hit wins; there is no
//! best-match search across categories. Confidence is a heuristic built from
//! the number of hits, an exact merchant match, and a few category-specific
//! amount patterns.

use chrono::NaiveDate;
use tracing::debug;

use crate::config::{CategoryRule, CategoryTable};
use crate::models::{category, CategorizationResult, CategorizedTransaction, TransactionInput};

/// Hard ceiling on categorizer confidence
pub const MAX_CONFIDENCE: f64 = 0.95;

/// Ceiling for the keyword-count part of the score
const KEYWORD_CONFIDENCE_CAP: f64 = 0.9;
const BASE_CONFIDENCE: f64 = 0.6;
const PER_KEYWORD_BOOST: f64 = 0.1;
const MERCHANT_MATCH_BOOST: f64 = 0.2;
const AMOUNT_PATTERN_BOOST: f64 = 0.1;

/// Unmatched transactions above this amount become "Large Purchase"
const LARGE_PURCHASE_THRESHOLD: f64 = 500.0;
const LARGE_PURCHASE_CONFIDENCE: f64 = 0.6;
const OTHER_CONFIDENCE: f64 = 0.4;

/// How many matched keywords to list in the reasoning string
const REASONING_KEYWORDS: usize = 2;

/// Rule-based categorizer over an injectable keyword table
#[derive(Debug, Clone)]
pub struct Categorizer {
    table: CategoryTable,
}

impl Default for Categorizer {
    fn default() -> Self {
        Self::new(CategoryTable::default())
    }
}

impl Categorizer {
    pub fn new(table: CategoryTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &CategoryTable {
        &self.table
    }

    /// Categorize one transaction. Never fails.
    pub fn categorize(&self, input: &TransactionInput) -> CategorizationResult {
        let text = format!(
            "{} {}",
            input.description,
            input.merchant_name.as_deref().unwrap_or("")
        )
        .to_lowercase();

        for rule in self.table.rules() {
            let matches: Vec<&str> = rule
                .keywords
                .iter()
                .filter(|k| text.contains(k.as_str()))
                .map(String::as_str)
                .collect();

            if matches.is_empty() {
                continue;
            }

            let confidence = score(rule, &matches, input);
            debug!(
                description = %input.description,
                category = %rule.name,
                matches = matches.len(),
                confidence,
                "Keyword match"
            );

            let shown: Vec<&str> = matches.iter().take(REASONING_KEYWORDS).copied().collect();
            return CategorizationResult {
                category: rule.name.clone(),
                confidence,
                reasoning: format!("Matched keywords: {}", shown.join(", ")),
            };
        }

        if input.amount > LARGE_PURCHASE_THRESHOLD {
            debug!(description = %input.description, amount = input.amount, "No keyword match, large amount");
            return CategorizationResult {
                category: category::LARGE_PURCHASE.to_string(),
                confidence: LARGE_PURCHASE_CONFIDENCE,
                reasoning: "High amount transaction".to_string(),
            };
        }

        debug!(description = %input.description, "No keyword match");
        CategorizationResult {
            category: category::OTHER.to_string(),
            confidence: OTHER_CONFIDENCE,
            reasoning: "No clear category match found".to_string(),
        }
    }

    /// Categorize an incoming transaction and attach the result
    pub fn apply(&self, input: TransactionInput, date: NaiveDate) -> CategorizedTransaction {
        let result = self.categorize(&input);
        CategorizedTransaction::from_input(input, date, result)
    }
}

fn score(rule: &CategoryRule, matches: &[&str], input: &TransactionInput) -> f64 {
    let mut confidence =
        (BASE_CONFIDENCE + PER_KEYWORD_BOOST * matches.len() as f64).min(KEYWORD_CONFIDENCE_CAP);

    if let Some(merchant) = input.merchant_name.as_deref() {
        let merchant = merchant.to_lowercase();
        if rule.keywords.iter().any(|k| *k == merchant) {
            confidence = (confidence + MERCHANT_MATCH_BOOST).min(MAX_CONFIDENCE);
        }
    }

    let amount = input.amount;
    let amount_pattern = match rule.name.as_str() {
        category::BILLS_AND_UTILITIES => amount > 50.0,
        category::FOOD_AND_DINING => amount < 50.0,
        category::SHOPPING => amount > 20.0,
        _ => false,
    };
    if amount_pattern {
        confidence += AMOUNT_PATTERN_BOOST;
    }

    confidence.min(MAX_CONFIDENCE)
}
