//! Domain models for Sift
//!
//! Everything here is a plain value object. The engine consumes these and
//! returns new ones; nothing is shared or mutated between calls.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Well-known category names
///
/// The eight keyword categories come from the category table (and can be
/// overridden by config); `LARGE_PURCHASE` and `OTHER` are the fallbacks the
/// categorizer assigns when nothing matches.
pub mod category {
    pub const FOOD_AND_DINING: &str = "Food & Dining";
    pub const TRANSPORTATION: &str = "Transportation";
    pub const SHOPPING: &str = "Shopping";
    pub const BILLS_AND_UTILITIES: &str = "Bills & Utilities";
    pub const ENTERTAINMENT: &str = "Entertainment";
    pub const HEALTHCARE: &str = "Healthcare";
    pub const TRAVEL: &str = "Travel";
    pub const BANKING_AND_FINANCE: &str = "Banking & Finance";
    pub const LARGE_PURCHASE: &str = "Large Purchase";
    pub const OTHER: &str = "Other";
}

fn default_category() -> String {
    category::OTHER.to_string()
}

/// A transaction as it arrives from the bank sync, before categorization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionInput {
    pub description: String,
    pub merchant_name: Option<String>,
    /// Positive = outflow/debit
    pub amount: f64,
    /// Category hints from the upstream aggregator (accepted, not used for matching)
    #[serde(default)]
    pub raw_category: Option<Vec<String>>,
}

impl TransactionInput {
    pub fn new(description: impl Into<String>, amount: f64) -> Self {
        Self {
            description: description.into(),
            merchant_name: None,
            amount,
            raw_category: None,
        }
    }

    pub fn with_merchant(mut self, merchant: impl Into<String>) -> Self {
        self.merchant_name = Some(merchant.into());
        self
    }

    pub fn with_raw_category(mut self, raw: Vec<String>) -> Self {
        self.raw_category = Some(raw);
        self
    }
}

/// Output of the categorizer for a single transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorizationResult {
    pub category: String,
    /// Heuristic certainty, never above 0.95
    pub confidence: f64,
    /// Short explanation (matched keywords or the fallback rule)
    pub reasoning: String,
}

/// A transaction that already carries a category
///
/// This is the unit the insight generator, subscription detector, and
/// budget reports consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorizedTransaction {
    pub date: NaiveDate,
    pub description: String,
    pub merchant_name: Option<String>,
    /// Positive = outflow/debit
    pub amount: f64,
    #[serde(default)]
    pub raw_category: Option<Vec<String>>,
    #[serde(default = "default_category")]
    pub category: String,
    /// Categorizer confidence, when known
    #[serde(default)]
    pub confidence: Option<f64>,
}

impl CategorizedTransaction {
    /// Create a transaction in the given category with no merchant or confidence
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            date,
            description: description.into(),
            merchant_name: None,
            amount,
            raw_category: None,
            category: category.into(),
            confidence: None,
        }
    }

    /// Attach a categorization result to an incoming transaction
    pub fn from_input(input: TransactionInput, date: NaiveDate, result: CategorizationResult) -> Self {
        Self {
            date,
            description: input.description,
            merchant_name: input.merchant_name,
            amount: input.amount,
            raw_category: input.raw_category,
            category: result.category,
            confidence: Some(result.confidence),
        }
    }

    pub fn with_merchant(mut self, merchant: impl Into<String>) -> Self {
        self.merchant_name = Some(merchant.into());
        self
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }
}

/// An active budget record supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub category: String,
    pub monthly_limit: f64,
}

impl Budget {
    pub fn new(category: impl Into<String>, monthly_limit: f64) -> Self {
        Self {
            category: category.into(),
            monthly_limit,
        }
    }
}

/// Budget evaluation tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    /// Below 80% of the limit
    Under,
    /// 80% up to (not including) 100%
    Approaching,
    /// At or above the limit
    Over,
}

impl BudgetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Under => "under",
            Self::Approaching => "approaching",
            Self::Over => "over",
        }
    }
}

impl std::str::FromStr for BudgetStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "under" => Ok(Self::Under),
            "approaching" => Ok(Self::Approaching),
            "over" => Ok(Self::Over),
            _ => Err(format!("Unknown budget status: {}", s)),
        }
    }
}

impl std::fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of comparing spend against a limit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetEvaluation {
    pub status: BudgetStatus,
    /// `spent / limit * 100`, unbounded above 100
    pub percentage: f64,
    pub message: String,
}
