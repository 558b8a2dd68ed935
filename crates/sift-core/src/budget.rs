//! Budget evaluation
//!
//! Tiers are derived from the spent/limit percentage: below 80% is `under`,
//! 80% up to 100% is `approaching`, 100% and above is `over`. A limit of zero
//! (or a negative/non-finite one) has no meaningful percentage; it evaluates to
//! `under` at 0% with a "No budget limit set" message.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::display::percent;
use crate::models::{Budget, BudgetEvaluation, BudgetStatus, CategorizedTransaction};

const APPROACHING_PERCENT: f64 = 80.0;
const OVER_PERCENT: f64 = 100.0;

/// Nominal month length used for spend projection
const DAYS_PER_MONTH: f64 = 30.0;

/// Compare spend against a limit
pub fn analyze_budget(spent: f64, budget: f64) -> BudgetEvaluation {
    if !budget.is_finite() || budget <= 0.0 {
        debug!(spent, budget, "Budget limit is not positive, skipping evaluation");
        return BudgetEvaluation {
            status: BudgetStatus::Under,
            percentage: 0.0,
            message: "No budget limit set".to_string(),
        };
    }

    let percentage = spent / budget * 100.0;

    if percentage < APPROACHING_PERCENT {
        BudgetEvaluation {
            status: BudgetStatus::Under,
            percentage,
            message: format!(
                "You're doing great! {}% of budget remaining",
                percent(OVER_PERCENT - percentage)
            ),
        }
    } else if percentage < OVER_PERCENT {
        BudgetEvaluation {
            status: BudgetStatus::Approaching,
            percentage,
            message: format!(
                "Approaching budget limit. {}% remaining",
                percent(OVER_PERCENT - percentage)
            ),
        }
    } else {
        BudgetEvaluation {
            status: BudgetStatus::Over,
            percentage,
            message: format!(
                "Budget exceeded by {}%",
                percent(percentage - OVER_PERCENT)
            ),
        }
    }
}

/// A budget's month-to-date standing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetReport {
    pub category: String,
    pub budget_limit: f64,
    pub amount_spent: f64,
    pub remaining: f64,
    pub percentage_used: f64,
    pub status: BudgetStatus,
    pub message: String,
    pub transaction_count: usize,
    pub days_into_month: u32,
    /// Spend extrapolated to a 30-day month at the current daily rate
    pub projected_monthly_spend: f64,
}

/// Evaluate each budget against the transactions in its category
///
/// `transactions` should already be limited to the current month; `as_of`
/// supplies the day of month for projection.
pub fn evaluate_budgets(
    budgets: &[Budget],
    transactions: &[CategorizedTransaction],
    as_of: NaiveDate,
) -> Vec<BudgetReport> {
    let days_into_month = as_of.day();

    budgets
        .iter()
        .map(|budget| {
            let matching: Vec<&CategorizedTransaction> = transactions
                .iter()
                .filter(|tx| tx.category == budget.category)
                .collect();
            let spent: f64 = matching.iter().map(|tx| tx.amount.abs()).sum();
            let evaluation = analyze_budget(spent, budget.monthly_limit);

            BudgetReport {
                category: budget.category.clone(),
                budget_limit: budget.monthly_limit,
                amount_spent: spent,
                remaining: budget.monthly_limit - spent,
                percentage_used: evaluation.percentage,
                status: evaluation.status,
                message: evaluation.message,
                transaction_count: matching.len(),
                days_into_month,
                projected_monthly_spend: spent * (DAYS_PER_MONTH / days_into_month as f64),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_approaching() {
        let eval = analyze_budget(450.0, 500.0);
        assert_eq!(eval.status, BudgetStatus::Approaching);
        assert_close(eval.percentage, 90.0);
        assert_eq!(eval.message, "Approaching budget limit. 10% remaining");
    }

    #[test]
    fn test_over() {
        let eval = analyze_budget(600.0, 500.0);
        assert_eq!(eval.status, BudgetStatus::Over);
        assert_close(eval.percentage, 120.0);
        assert_eq!(eval.message, "Budget exceeded by 20%");
    }

    #[test]
    fn test_under() {
        let eval = analyze_budget(100.0, 400.0);
        assert_eq!(eval.status, BudgetStatus::Under);
        assert_close(eval.percentage, 25.0);
        assert_eq!(eval.message, "You're doing great! 75% of budget remaining");
    }

    #[test]
    fn test_half_percent_rounds_up() {
        // 87.5% used leaves exactly 12.5%
        let eval = analyze_budget(437.5, 500.0);
        assert_eq!(eval.message, "Approaching budget limit. 13% remaining");

        // 62.5% used leaves exactly 37.5%
        let eval = analyze_budget(250.0, 400.0);
        assert_eq!(eval.message, "You're doing great! 38% of budget remaining");
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(analyze_budget(79.99, 100.0).status, BudgetStatus::Under);
        assert_eq!(analyze_budget(80.0, 100.0).status, BudgetStatus::Approaching);
        assert_eq!(analyze_budget(99.99, 100.0).status, BudgetStatus::Approaching);
        assert_eq!(analyze_budget(100.0, 100.0).status, BudgetStatus::Over);
    }

    #[test]
    fn test_zero_limit_sentinel() {
        for limit in [0.0, -50.0, f64::NAN, f64::INFINITY] {
            let eval = analyze_budget(120.0, limit);
            assert_eq!(eval.status, BudgetStatus::Under);
            assert_eq!(eval.percentage, 0.0);
            assert_eq!(eval.message, "No budget limit set");
        }
    }

    #[test]
    fn test_percentage_strictly_increasing() {
        let spends = [0.0, 0.01, 10.0, 79.0, 80.0, 99.5, 100.0, 250.0, 10_000.0];
        let percentages: Vec<f64> = spends
            .iter()
            .map(|s| analyze_budget(*s, 300.0).percentage)
            .collect();
        assert!(percentages.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_evaluate_budgets() {
        let as_of = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let txs = vec![
            CategorizedTransaction::new(as_of, "CHIPOTLE", 150.0, "Food & Dining"),
            CategorizedTransaction::new(as_of, "PANERA", 90.0, "Food & Dining"),
            CategorizedTransaction::new(as_of, "REFUND", -60.0, "Food & Dining"),
            CategorizedTransaction::new(as_of, "SHELL", 40.0, "Transportation"),
        ];
        let budgets = vec![
            Budget::new("Food & Dining", 300.0),
            Budget::new("Travel", 200.0),
        ];

        let reports = evaluate_budgets(&budgets, &txs, as_of);
        assert_eq!(reports.len(), 2);

        let food = &reports[0];
        assert_close(food.amount_spent, 300.0);
        assert_close(food.remaining, 0.0);
        assert_eq!(food.status, BudgetStatus::Over);
        assert_eq!(food.transaction_count, 3);
        assert_eq!(food.days_into_month, 15);
        assert_close(food.projected_monthly_spend, 600.0);

        let travel = &reports[1];
        assert_eq!(travel.transaction_count, 0);
        assert_eq!(travel.status, BudgetStatus::Under);
        assert_eq!(travel.message, "You're doing great! 100% of budget remaining");
    }
}
