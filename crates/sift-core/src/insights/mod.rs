//! Insight Generator - period-over-period spending findings
//!
//! Compares the current window of categorized transactions against the
//! previous one and surfaces short, prioritized findings. Each check is an
//! independent [`InsightRule`]; the generator evaluates them in a fixed order
//! and keeps the first [`MAX_INSIGHTS`].
//!
//! ## Built-in Rules (evaluation order)
//!
//! - **Category Overspend** - categories up >30% and >$50 vs the previous window
//! - **Spending Trend** - total spend up more than $100
//! - **Dining Recommendation** - dining spend above $400
//! - **Large Transactions** - any current transaction above $200
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sift_core::insights::InsightGenerator;
//!
//! let generator = InsightGenerator::new();
//! let insights = generator.generate(&current, &previous);
//! ```

pub mod dining;
pub mod engine;
pub mod large_transactions;
pub mod overspending;
pub mod trend;
pub mod types;

pub use dining::DiningRecommendationRule;
pub use engine::{CategoryTotals, InsightGenerator, InsightRule, PeriodComparison, MAX_INSIGHTS};
pub use large_transactions::LargeTransactionRule;
pub use overspending::CategoryOverspendRule;
pub use trend::SpendingTrendRule;
pub use types::{Insight, InsightKind, Priority};
