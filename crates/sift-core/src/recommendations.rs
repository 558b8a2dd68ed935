//! Savings recommendations
//!
//! Two rule-of-thumb suggestions over a single window of spending: trim a
//! heavy dining budget, and review a long list of subscriptions.

use serde::{Deserialize, Serialize};

use crate::display::money;
use crate::insights::{CategoryTotals, Priority};
use crate::models::{category, CategorizedTransaction};
use crate::subscriptions::SubscriptionDetector;

/// Dining spend above this triggers a savings suggestion
const DINING_THRESHOLD: f64 = 300.0;
/// Expected share of dining spend saved by meal prepping
const DINING_SAVINGS_RATE: f64 = 0.3;
/// More subscriptions than this triggers a review suggestion
const SUBSCRIPTION_COUNT_THRESHOLD: usize = 3;
/// Expected share of subscription cost saved by cancelling unused ones
const SUBSCRIPTION_SAVINGS_RATE: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    Savings,
    Optimization,
}

impl RecommendationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Savings => "savings",
            Self::Optimization => "optimization",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effort {
    Low,
    Medium,
    High,
}

impl Effort {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub category: String,
    pub title: String,
    pub description: String,
    pub potential_savings: f64,
    pub effort: Effort,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub recommendations: Vec<Recommendation>,
    pub total_potential_savings: f64,
}

/// Build recommendations from one window of categorized transactions
pub fn recommend(
    transactions: &[CategorizedTransaction],
    detector: &SubscriptionDetector,
) -> RecommendationSet {
    let mut recommendations = Vec::new();
    let totals = CategoryTotals::from_transactions(transactions);

    let dining = totals.get(category::FOOD_AND_DINING);
    if dining > DINING_THRESHOLD {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Savings,
            category: category::FOOD_AND_DINING.to_string(),
            title: "Reduce Dining Costs".to_string(),
            description: format!(
                "You spent ${} on dining this month. Try meal prepping to save 30%.",
                money(dining)
            ),
            potential_savings: dining * DINING_SAVINGS_RATE,
            effort: Effort::Medium,
            priority: Priority::High,
        });
    }

    let subscriptions = detector.detect(transactions);
    if subscriptions.len() > SUBSCRIPTION_COUNT_THRESHOLD {
        let monthly: f64 = subscriptions.iter().map(|tx| tx.amount.abs()).sum();
        recommendations.push(Recommendation {
            kind: RecommendationKind::Optimization,
            category: "Subscriptions".to_string(),
            title: "Review Subscriptions".to_string(),
            description: format!(
                "You have {} subscriptions costing ${}/month. Consider canceling unused ones.",
                subscriptions.len(),
                money(monthly)
            ),
            potential_savings: monthly * SUBSCRIPTION_SAVINGS_RATE,
            effort: Effort::Low,
            priority: Priority::Medium,
        });
    }

    let total_potential_savings = recommendations.iter().map(|r| r.potential_savings).sum();

    RecommendationSet {
        recommendations,
        total_potential_savings,
    }
}
