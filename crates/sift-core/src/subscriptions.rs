//! Subscription detection
//!
//! A single-snapshot heuristic: a transaction is a subscription candidate when
//! its description contains a recurring-service keyword and its absolute
//! amount is under the configured ceiling. There is no interval or
//! periodicity check and no deduplication, so a service billed three times in
//! the window shows up three times. Callers pre-filter to the window they care
//! about (typically the last 90 days).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::SubscriptionConfig;
use crate::models::CategorizedTransaction;

/// Months per year, for annualizing monthly charges
const MONTHS_PER_YEAR: f64 = 12.0;

/// Keyword + amount filter for recurring charges
#[derive(Debug, Clone)]
pub struct SubscriptionDetector {
    config: SubscriptionConfig,
}

impl Default for SubscriptionDetector {
    fn default() -> Self {
        Self::new(SubscriptionConfig::default())
    }
}

impl SubscriptionDetector {
    pub fn new(config: SubscriptionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SubscriptionConfig {
        &self.config
    }

    /// Whether a single transaction looks like a subscription charge
    pub fn is_candidate(&self, tx: &CategorizedTransaction) -> bool {
        let description = tx.description.to_lowercase();
        self.config
            .keywords
            .iter()
            .any(|k| description.contains(k.as_str()))
            && tx.amount.abs() < self.config.max_amount
    }

    /// Filter to subscription candidates, preserving input order
    pub fn detect<'a>(
        &self,
        transactions: &'a [CategorizedTransaction],
    ) -> Vec<&'a CategorizedTransaction> {
        let candidates: Vec<_> = transactions
            .iter()
            .filter(|tx| self.is_candidate(tx))
            .collect();
        debug!(
            scanned = transactions.len(),
            found = candidates.len(),
            "Subscription scan complete"
        );
        candidates
    }
}

/// One detected charge, shaped for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionCharge {
    pub description: String,
    /// Absolute charge amount
    pub amount: f64,
    pub last_charged: NaiveDate,
    pub merchant: Option<String>,
    pub category: String,
    pub estimated_annual_cost: f64,
}

/// Detected charges plus monthly/annual cost totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionSummary {
    pub subscriptions: Vec<SubscriptionCharge>,
    pub total_subscriptions: usize,
    /// Sum of absolute candidate amounts (treated as one month of charges)
    pub monthly_cost: f64,
    pub annual_cost: f64,
}

impl SubscriptionSummary {
    pub fn from_candidates(candidates: &[&CategorizedTransaction]) -> Self {
        let subscriptions: Vec<SubscriptionCharge> = candidates
            .iter()
            .map(|tx| {
                let amount = tx.amount.abs();
                SubscriptionCharge {
                    description: tx.description.clone(),
                    amount,
                    last_charged: tx.date,
                    merchant: tx.merchant_name.clone(),
                    category: tx.category.clone(),
                    estimated_annual_cost: amount * MONTHS_PER_YEAR,
                }
            })
            .collect();

        let monthly_cost: f64 = subscriptions.iter().map(|s| s.amount).sum();

        Self {
            total_subscriptions: subscriptions.len(),
            subscriptions,
            monthly_cost,
            annual_cost: monthly_cost * MONTHS_PER_YEAR,
        }
    }
}
