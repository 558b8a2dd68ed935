//! Spending Trend
//!
//! Flags an overall increase of more than $100 across all categories.

use crate::display::money;

use super::engine::{InsightRule, PeriodComparison};
use super::types::{Insight, InsightKind, Priority};

const MIN_TOTAL_INCREASE: f64 = 100.0;
const CONFIDENCE: f64 = 0.9;

pub struct SpendingTrendRule;

impl InsightRule for SpendingTrendRule {
    fn name(&self) -> &'static str {
        "Spending Trend"
    }

    fn evaluate(&self, comparison: &PeriodComparison<'_>) -> Vec<Insight> {
        let total_current = comparison.current_totals.total();
        let total_previous = comparison.previous_totals.total();

        if total_current <= total_previous + MIN_TOTAL_INCREASE {
            return vec![];
        }

        vec![Insight::new(
            InsightKind::Trend,
            "Increased Spending Trend",
            format!(
                "Your overall spending increased by ${} this month",
                money(total_current - total_previous)
            ),
            CONFIDENCE,
            Priority::Medium,
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategorizedTransaction;
    use chrono::NaiveDate;

    fn tx(category: &str, amount: f64) -> CategorizedTransaction {
        CategorizedTransaction::new(
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            "TEST",
            amount,
            category,
        )
    }

    #[test]
    fn test_trend_across_categories() {
        let current = [tx("Shopping", 120.0), tx("Travel", 140.5)];
        let previous = [tx("Shopping", 100.0)];
        let insights = SpendingTrendRule.evaluate(&PeriodComparison::new(&current, &previous));

        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].kind, InsightKind::Trend);
        assert_eq!(
            insights[0].message,
            "Your overall spending increased by $160.50 this month"
        );
        assert_eq!(insights[0].priority, Priority::Medium);
    }

    #[test]
    fn test_exactly_one_hundred_is_not_a_trend() {
        let current = [tx("Shopping", 200.0)];
        let previous = [tx("Shopping", 100.0)];
        assert!(SpendingTrendRule
            .evaluate(&PeriodComparison::new(&current, &previous))
            .is_empty());
    }
}
