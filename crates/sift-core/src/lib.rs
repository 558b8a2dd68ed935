//! Sift Core Library
//!
//! Rule-based analysis engine for the Sift personal finance tool:
//! - Keyword categorizer with confidence scoring
//! - Insight generator comparing two spending windows
//! - Subscription detector (keyword + amount heuristic)
//! - Budget evaluator and month-to-date budget reports
//! - Category breakdown and savings recommendations
//! - Config loading for the keyword tables
//! - CSV input for transactions and budgets
//!
//! Every analysis function is pure: no I/O, no shared state, safe to call
//! from any number of threads.

pub mod analysis;
pub mod budget;
pub mod categorize;
pub mod config;
pub mod display;
pub mod error;
pub mod import;
pub mod insights;
pub mod models;
pub mod period;
pub mod recommendations;
pub mod subscriptions;

pub use analysis::{category_breakdown, CategorySpending, SpendingBreakdown};
pub use budget::{analyze_budget, evaluate_budgets, BudgetReport};
pub use categorize::Categorizer;
pub use config::{CategoryRule, CategoryTable, EngineConfig, SubscriptionConfig};
pub use error::{Error, Result};
pub use import::{load_transactions, parse_budgets, parse_transactions, ImportedTransaction};
pub use insights::{Insight, InsightGenerator, InsightKind, InsightRule, Priority};
pub use models::{
    Budget, BudgetEvaluation, BudgetStatus, CategorizationResult, CategorizedTransaction,
    TransactionInput,
};
pub use period::{split_windows, Period};
pub use recommendations::{recommend, Recommendation, RecommendationSet};
pub use subscriptions::{SubscriptionCharge, SubscriptionDetector, SubscriptionSummary};
