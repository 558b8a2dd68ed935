//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared utilities (config, CSV loading, dates, JSON output)
//! - `categorize` - Single-transaction and whole-file categorization, category table
//! - `insights` - Period-over-period insights
//! - `subscriptions` - Subscription detection
//! - `budgets` - Month-to-date budget evaluation
//! - `reports` - Category breakdown and recommendations

pub mod budgets;
pub mod categorize;
pub mod core;
pub mod insights;
pub mod reports;
pub mod subscriptions;

// Re-export command functions for main.rs
pub use budgets::*;
pub use categorize::*;
pub use core::*;
pub use insights::*;
pub use reports::*;
pub use subscriptions::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
