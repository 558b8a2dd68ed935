//! Insight generator - runs the registered rules over two spending windows

use std::collections::HashMap;

use crate::models::{category, CategorizedTransaction};

use super::types::Insight;
use super::{
    CategoryOverspendRule, DiningRecommendationRule, LargeTransactionRule, SpendingTrendRule,
};

/// Upper bound on insights returned from one call
pub const MAX_INSIGHTS: usize = 5;

/// Per-category spend (sum of absolute amounts), in first-seen order
#[derive(Debug, Clone, Default)]
pub struct CategoryTotals {
    order: Vec<String>,
    amounts: HashMap<String, f64>,
}

impl CategoryTotals {
    /// Group transactions by category; blank categories count as "Other"
    pub fn from_transactions(transactions: &[CategorizedTransaction]) -> Self {
        let mut totals = Self::default();
        for tx in transactions {
            let category = if tx.category.trim().is_empty() {
                category::OTHER
            } else {
                tx.category.as_str()
            };
            totals.add(category, tx.amount.abs());
        }
        totals
    }

    fn add(&mut self, category: &str, amount: f64) {
        match self.amounts.get_mut(category) {
            Some(total) => *total += amount,
            None => {
                self.order.push(category.to_string());
                self.amounts.insert(category.to_string(), amount);
            }
        }
    }

    /// Spend for a category, 0 when absent
    pub fn get(&self, category: &str) -> f64 {
        self.amounts.get(category).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.order
            .iter()
            .map(move |c| (c.as_str(), self.amounts[c.as_str()]))
    }

    pub fn total(&self) -> f64 {
        self.iter().map(|(_, amount)| amount).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Everything a rule needs: raw current transactions plus both windows' totals
pub struct PeriodComparison<'a> {
    pub current: &'a [CategorizedTransaction],
    pub current_totals: CategoryTotals,
    pub previous_totals: CategoryTotals,
}

impl<'a> PeriodComparison<'a> {
    pub fn new(
        current: &'a [CategorizedTransaction],
        previous: &'a [CategorizedTransaction],
    ) -> Self {
        Self {
            current,
            current_totals: CategoryTotals::from_transactions(current),
            previous_totals: CategoryTotals::from_transactions(previous),
        }
    }
}

/// One independent insight check
pub trait InsightRule: Send + Sync {
    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Evaluate the rule; may return any number of insights
    fn evaluate(&self, comparison: &PeriodComparison<'_>) -> Vec<Insight>;
}

/// Runs rules in registration order and caps the combined output
pub struct InsightGenerator {
    rules: Vec<Box<dyn InsightRule>>,
}

impl Default for InsightGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightGenerator {
    /// Create a generator with the built-in rules
    ///
    /// Registration order is output order, which decides what survives
    /// truncation when more than `MAX_INSIGHTS` fire.
    pub fn new() -> Self {
        let mut generator = Self::empty();

        generator.register(Box::new(CategoryOverspendRule));
        generator.register(Box::new(SpendingTrendRule));
        generator.register(Box::new(DiningRecommendationRule));
        generator.register(Box::new(LargeTransactionRule));

        generator
    }

    /// A generator with no rules registered
    pub fn empty() -> Self {
        Self { rules: vec![] }
    }

    pub fn register(&mut self, rule: Box<dyn InsightRule>) {
        self.rules.push(rule);
    }

    /// Names of the registered rules, in evaluation order
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Compare the current window against the previous one
    ///
    /// `previous` may be empty. Never fails; returns at most `MAX_INSIGHTS`.
    pub fn generate(
        &self,
        current: &[CategorizedTransaction],
        previous: &[CategorizedTransaction],
    ) -> Vec<Insight> {
        let comparison = PeriodComparison::new(current, previous);
        let mut insights = Vec::new();

        for rule in &self.rules {
            let found = rule.evaluate(&comparison);
            tracing::debug!(rule = rule.name(), count = found.len(), "Insight rule evaluated");
            insights.extend(found);
        }

        if insights.len() > MAX_INSIGHTS {
            tracing::debug!(
                generated = insights.len(),
                kept = MAX_INSIGHTS,
                "Truncating insights"
            );
            insights.truncate(MAX_INSIGHTS);
        }

        insights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::types::{InsightKind, Priority};
    use chrono::NaiveDate;

    fn tx(category: &str, amount: f64) -> CategorizedTransaction {
        CategorizedTransaction::new(
            NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            "TEST",
            amount,
            category,
        )
    }

    #[test]
    fn test_generator_rule_order() {
        let generator = InsightGenerator::new();
        assert_eq!(
            generator.rule_names(),
            vec![
                "Category Overspend",
                "Spending Trend",
                "Dining Recommendation",
                "Large Transactions",
            ]
        );
    }

    #[test]
    fn test_category_totals_use_absolute_amounts() {
        let txs = vec![tx("Shopping", 40.0), tx("Shopping", -10.0), tx("", 5.0)];
        let totals = CategoryTotals::from_transactions(&txs);

        assert_eq!(totals.get("Shopping"), 50.0);
        assert_eq!(totals.get(category::OTHER), 5.0);
        assert_eq!(totals.get("Travel"), 0.0);
        assert_eq!(totals.total(), 55.0);
        let order: Vec<&str> = totals.iter().map(|(c, _)| c).collect();
        assert_eq!(order, vec!["Shopping", category::OTHER]);
    }

    #[test]
    fn test_empty_inputs_yield_nothing() {
        let insights = InsightGenerator::new().generate(&[], &[]);
        assert!(insights.is_empty());
    }

    #[test]
    fn test_dining_without_history() {
        let current = vec![tx("Food & Dining", 250.0), tx("Food & Dining", 200.0)];
        let insights = InsightGenerator::new().generate(&current, &[]);

        assert!(insights
            .iter()
            .any(|i| i.kind == InsightKind::Recommendation && i.title.contains("Dining")));
        assert!(!insights.iter().any(|i| i.kind == InsightKind::Overspending));
    }

    #[test]
    fn test_output_order_follows_rules() {
        let current = vec![
            tx("Shopping", 300.0),
            tx("Food & Dining", 450.0),
        ];
        let previous = vec![tx("Shopping", 100.0), tx("Food & Dining", 400.0)];

        let kinds: Vec<InsightKind> = InsightGenerator::new()
            .generate(&current, &previous)
            .into_iter()
            .map(|i| i.kind)
            .collect();

        assert_eq!(
            kinds,
            vec![
                InsightKind::Overspending,
                InsightKind::Trend,
                InsightKind::Recommendation,
                InsightKind::Alert,
            ]
        );
    }

    #[test]
    fn test_truncates_to_five() {
        let categories = ["A", "B", "C", "D", "E", "F", "G"];
        let current: Vec<_> = categories.iter().map(|c| tx(c, 180.0)).collect();
        let previous: Vec<_> = categories.iter().map(|c| tx(c, 100.0)).collect();

        let insights = InsightGenerator::new().generate(&current, &previous);
        assert_eq!(insights.len(), MAX_INSIGHTS);
        assert!(insights.iter().all(|i| i.kind == InsightKind::Overspending));
        assert!(insights.iter().all(|i| i.priority == Priority::High));
        assert_eq!(insights[0].title, "A Overspend Alert");
        assert_eq!(insights[4].title, "E Overspend Alert");
    }

    #[test]
    fn test_custom_rule_registration() {
        struct Always;
        impl InsightRule for Always {
            fn name(&self) -> &'static str {
                "Always"
            }
            fn evaluate(&self, _: &PeriodComparison<'_>) -> Vec<Insight> {
                vec![Insight::new(
                    InsightKind::Alert,
                    "Always",
                    "fires",
                    0.5,
                    Priority::Low,
                )]
            }
        }

        let mut generator = InsightGenerator::empty();
        generator.register(Box::new(Always));
        let insights = generator.generate(&[], &[]);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].title, "Always");
    }
}
