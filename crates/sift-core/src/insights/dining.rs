//! Dining Recommendation
//!
//! Suggests cutting back when dining spend in the current window is above $400.

use crate::display::money;
use crate::models::category;

use super::engine::{InsightRule, PeriodComparison};
use super::types::{Insight, InsightKind, Priority};

const DINING_THRESHOLD: f64 = 400.0;
const CONFIDENCE: f64 = 0.8;

pub struct DiningRecommendationRule;

impl InsightRule for DiningRecommendationRule {
    fn name(&self) -> &'static str {
        "Dining Recommendation"
    }

    fn evaluate(&self, comparison: &PeriodComparison<'_>) -> Vec<Insight> {
        let dining = comparison.current_totals.get(category::FOOD_AND_DINING);
        if dining <= DINING_THRESHOLD {
            return vec![];
        }

        vec![Insight::new(
            InsightKind::Recommendation,
            "Dining Savings Opportunity",
            format!(
                "Consider meal prepping to reduce your ${} monthly dining spend by 30%",
                money(dining)
            ),
            CONFIDENCE,
            Priority::Low,
        )]
    }
}
