//! Large Transactions
//!
//! Counts raw (signed) current-window transactions above $200. Credits are
//! negative and therefore never counted.

use super::engine::{InsightRule, PeriodComparison};
use super::types::{Insight, InsightKind, Priority};

const LARGE_AMOUNT: f64 = 200.0;
const CONFIDENCE: f64 = 0.95;

pub struct LargeTransactionRule;

impl InsightRule for LargeTransactionRule {
    fn name(&self) -> &'static str {
        "Large Transactions"
    }

    fn evaluate(&self, comparison: &PeriodComparison<'_>) -> Vec<Insight> {
        let count = comparison
            .current
            .iter()
            .filter(|tx| tx.amount > LARGE_AMOUNT)
            .count();

        if count == 0 {
            return vec![];
        }

        vec![Insight::new(
            InsightKind::Alert,
            "Large Transactions Detected",
            format!("{} transactions over $200 this month", count),
            CONFIDENCE,
            Priority::Medium,
        )]
    }
}
