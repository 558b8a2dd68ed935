//! Core types for the insight generator

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of finding an insight reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// A category grew sharply against the previous period
    Overspending,
    /// Overall spending moved up
    Trend,
    /// A suggested change in behavior
    Recommendation,
    /// Something unusual worth a look
    Alert,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightKind::Overspending => "overspending",
            InsightKind::Trend => "trend",
            InsightKind::Recommendation => "recommendation",
            InsightKind::Alert => "alert",
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InsightKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overspending" => Ok(InsightKind::Overspending),
            "trend" => Ok(InsightKind::Trend),
            "recommendation" => Ok(InsightKind::Recommendation),
            "alert" => Ok(InsightKind::Alert),
            _ => Err(format!("Unknown insight kind: {}", s)),
        }
    }
}

/// How prominently an insight should be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(format!("Unknown priority: {}", s)),
        }
    }
}

/// A generated observation about spending behavior
///
/// Insights are produced fresh on every call; persisting, caching, or
/// marking them read is up to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: String,
    /// Human-readable text with interpolated figures
    pub message: String,
    /// Heuristic certainty in [0, 1]
    pub confidence: f64,
    pub priority: Priority,
}

impl Insight {
    pub fn new(
        kind: InsightKind,
        title: impl Into<String>,
        message: impl Into<String>,
        confidence: f64,
        priority: Priority,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            confidence: confidence.clamp(0.0, 1.0),
            priority,
        }
    }
}
