//! Engine configuration: the category keyword table and subscription keywords
//!
//! The category table is an ordered list of `{name, keywords}` pairs. Order is
//! part of the contract: the categorizer assigns the first category with any
//! keyword hit, so moving a category up or down changes results for
//! transactions that match more than one.
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a two-layer resolution:
//! 1. An explicit path (`--config`), or the override in the data dir
//!    (~/.local/share/sift/config/categories.toml) when it exists
//! 2. Fall back to embedded defaults (compiled into binary)
//!
//! A file may omit either section; missing sections come from the defaults.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/categories.toml");

/// Default subscription amount ceiling when neither file sets one
const DEFAULT_SUBSCRIPTION_MAX_AMOUNT: f64 = 50.0;

/// One category and the lowercase keyword substrings that select it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRule {
    pub name: String,
    pub keywords: Vec<String>,
}

impl CategoryRule {
    pub fn new<I, S>(name: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            name: name.into(),
            keywords: keywords
                .into_iter()
                .map(|k| normalize_keyword(k.as_ref()))
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }
}

/// Ordered category table; earlier rules take precedence
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTable {
    rules: Vec<CategoryRule>,
}

impl CategoryTable {
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// Category names in precedence order
    pub fn names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&CategoryRule> {
        self.rules.iter().find(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        EngineConfig::embedded().categories
    }
}

/// Keyword/amount settings for the subscription detector
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscriptionConfig {
    pub keywords: Vec<String>,
    /// Charges with `abs(amount)` at or above this are never subscriptions
    pub max_amount: f64,
}

impl Default for SubscriptionConfig {
    fn default() -> Self {
        EngineConfig::embedded().subscriptions
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub categories: CategoryTable,
    pub subscriptions: SubscriptionConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::embedded()
    }
}

impl EngineConfig {
    /// The compiled-in defaults
    pub fn embedded() -> Self {
        static EMBEDDED: OnceLock<EngineConfig> = OnceLock::new();
        EMBEDDED
            .get_or_init(|| {
                parse_config(DEFAULT_CONFIG, None).unwrap_or_else(|e| {
                    error!(error = %e, "Embedded category config is invalid");
                    EngineConfig {
                        categories: CategoryTable::new(Vec::new()),
                        subscriptions: SubscriptionConfig {
                            keywords: Vec::new(),
                            max_amount: DEFAULT_SUBSCRIPTION_MAX_AMOUNT,
                        },
                    }
                })
            })
            .clone()
    }

    /// Load configuration (explicit path, then data-dir override, then embedded)
    ///
    /// An explicit path that does not exist is an error; a missing data-dir
    /// override silently falls back to the embedded defaults.
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = override_path {
            if !path.exists() {
                return Err(Error::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            info!(path = %path.display(), "Loading category config");
            return Self::from_file(path);
        }

        if let Some(default_path) = default_config_path() {
            if default_path.exists() {
                info!(path = %default_path.display(), "Loading category config override");
                return Self::from_file(&default_path);
            }
        }

        debug!("Using embedded category config");
        Ok(Self::embedded())
    }

    /// Load from a specific TOML file, filling missing sections from defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        debug!(path = %path.display(), bytes = content.len(), "Read category config");
        Self::from_toml(&content)
    }

    /// Parse TOML content, filling missing sections from defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        parse_config(content, Some(&Self::embedded()))
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("sift").join("config").join("categories.toml"))
}

fn normalize_keyword(keyword: &str) -> String {
    keyword.trim().to_lowercase()
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    categories: Option<Vec<RawCategory>>,
    subscriptions: Option<RawSubscriptions>,
}

#[derive(Debug, Deserialize)]
struct RawCategory {
    name: String,
    #[serde(default)]
    keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawSubscriptions {
    keywords: Option<Vec<String>>,
    max_amount: Option<f64>,
}

/// Parse config from TOML content
///
/// With no `fallback`, both sections are required.
fn parse_config(content: &str, fallback: Option<&EngineConfig>) -> Result<EngineConfig> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let categories = match raw.categories {
        Some(raw_categories) => build_table(raw_categories)?,
        None => fallback
            .map(|f| f.categories.clone())
            .ok_or_else(|| Error::Config("Missing [[categories]] section".into()))?,
    };

    let subscriptions = match raw.subscriptions {
        Some(raw_subs) => {
            let keywords = match raw_subs.keywords {
                Some(keywords) => keywords
                    .iter()
                    .map(|k| normalize_keyword(k))
                    .filter(|k| !k.is_empty())
                    .collect(),
                None => fallback
                    .map(|f| f.subscriptions.keywords.clone())
                    .unwrap_or_default(),
            };
            let max_amount = raw_subs
                .max_amount
                .or_else(|| fallback.map(|f| f.subscriptions.max_amount))
                .unwrap_or(DEFAULT_SUBSCRIPTION_MAX_AMOUNT);
            if !max_amount.is_finite() || max_amount <= 0.0 {
                return Err(Error::Config(format!(
                    "subscriptions.max_amount must be positive, got {}",
                    max_amount
                )));
            }
            SubscriptionConfig {
                keywords,
                max_amount,
            }
        }
        None => fallback
            .map(|f| f.subscriptions.clone())
            .ok_or_else(|| Error::Config("Missing [subscriptions] section".into()))?,
    };

    Ok(EngineConfig {
        categories,
        subscriptions,
    })
}

fn build_table(raw_categories: Vec<RawCategory>) -> Result<CategoryTable> {
    if raw_categories.is_empty() {
        return Err(Error::Config("At least one category is required".into()));
    }

    let mut seen = HashSet::new();
    let mut rules = Vec::with_capacity(raw_categories.len());
    for raw in raw_categories {
        let name = raw.name.trim().to_string();
        if name.is_empty() {
            return Err(Error::Config("Category name cannot be empty".into()));
        }
        if !seen.insert(name.clone()) {
            return Err(Error::Config(format!("Duplicate category: {}", name)));
        }
        let rule = CategoryRule::new(name, raw.keywords);
        if rule.keywords.is_empty() {
            debug!(category = %rule.name, "Category has no keywords and will never match");
        }
        rules.push(rule);
    }

    Ok(CategoryTable::new(rules))
}
