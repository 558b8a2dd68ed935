//! Category Overspend
//!
//! Flags categories whose spend grew more than 30% (and by more than $50)
//! over the previous window. Categories with no previous spend are never
//! flagged: with a zero baseline the percent increase is treated as 0.

use crate::display::{money, percent};

use super::engine::{InsightRule, PeriodComparison};
use super::types::{Insight, InsightKind, Priority};

const MIN_PERCENT_INCREASE: f64 = 30.0;
const MIN_DOLLAR_INCREASE: f64 = 50.0;
/// Above this percent increase the alert is high priority
const HIGH_PRIORITY_PERCENT: f64 = 50.0;
const CONFIDENCE: f64 = 0.85;

/// Emits one overspending insight per qualifying category
pub struct CategoryOverspendRule;

impl InsightRule for CategoryOverspendRule {
    fn name(&self) -> &'static str {
        "Category Overspend"
    }

    fn evaluate(&self, comparison: &PeriodComparison<'_>) -> Vec<Insight> {
        let mut insights = Vec::new();

        for (category, current) in comparison.current_totals.iter() {
            let previous = comparison.previous_totals.get(category);
            let increase = current - previous;
            let percent_increase = if previous > 0.0 {
                increase / previous * 100.0
            } else {
                0.0
            };

            if percent_increase > MIN_PERCENT_INCREASE && increase > MIN_DOLLAR_INCREASE {
                let priority = if percent_increase > HIGH_PRIORITY_PERCENT {
                    Priority::High
                } else {
                    Priority::Medium
                };

                insights.push(Insight::new(
                    InsightKind::Overspending,
                    format!("{} Overspend Alert", category),
                    format!(
                        "You've spent {}% more on {} this month (${} increase)",
                        percent(percent_increase),
                        category,
                        money(increase)
                    ),
                    CONFIDENCE,
                    priority,
                ));
            }
        }

        insights
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

    fn evaluate(current: &[CategorizedTransaction], previous: &[CategorizedTransaction]) -> Vec<Insight> {
        CategoryOverspendRule.evaluate(&PeriodComparison::new(current, previous))
    }

    #[test]
    fn test_high_priority_overspend() {
        let insights = evaluate(&[tx("Shopping", 300.0)], &[tx("Shopping", 100.0)]);

        assert_eq!(insights.len(), 1);
        let insight = &insights[0];
        assert_eq!(insight.kind, InsightKind::Overspending);
        assert_eq!(insight.title, "Shopping Overspend Alert");
        assert_eq!(
            insight.message,
            "You've spent 200% more on Shopping this month ($200.00 increase)"
        );
        assert_eq!(insight.priority, Priority::High);
        assert_eq!(insight.confidence, 0.85);
    }

    #[test]
    fn test_medium_priority_overspend() {
        // +40% and +$80
        let insights = evaluate(&[tx("Travel", 280.0)], &[tx("Travel", 200.0)]);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].priority, Priority::Medium);
        assert!(insights[0].message.contains("40%"));
        assert!(insights[0].message.contains("$80.00"));
    }

    #[test]
    fn test_half_percent_rounds_up() {
        // 100 / 160 = 62.5%
        let insights = evaluate(&[tx("Shopping", 260.0)], &[tx("Shopping", 160.0)]);
        assert_eq!(insights.len(), 1);
        assert_eq!(
            insights[0].message,
            "You've spent 63% more on Shopping this month ($100.00 increase)"
        );
    }

    #[test]
    fn test_requires_both_thresholds() {
        // +100% but only +$40
        assert!(evaluate(&[tx("Healthcare", 80.0)], &[tx("Healthcare", 40.0)]).is_empty());
        // +$100 but only +10%
        assert!(evaluate(&[tx("Shopping", 1100.0)], &[tx("Shopping", 1000.0)]).is_empty());
    }

    #[test]
    fn test_no_baseline_never_flags() {
        assert!(evaluate(&[tx("Food & Dining", 450.0)], &[]).is_empty());
    }

    #[test]
    fn test_refunds_count_as_spend() {
        // Absolute amounts: current 60 + 60 = 120 vs 50
        let current = [tx("Shopping", 60.0), tx("Shopping", -60.0)];
        let insights = evaluate(&current, &[tx("Shopping", 50.0)]);
        assert_eq!(insights.len(), 1);
        assert!(insights[0].message.contains("$70.00"));
    }
}
