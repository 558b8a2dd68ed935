//! CSV input for transactions and budgets
//!
//! Transactions: `Date,Description,Merchant,Amount,Category` (header names are
//! matched case-insensitively; `Merchant` and `Category` may be missing or
//! empty). Budgets: `Category,Monthly Limit`.

use std::io::Read;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, warn};

use crate::categorize::Categorizer;
use crate::error::{Error, Result};
use crate::models::{Budget, CategorizedTransaction, TransactionInput};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// A transaction row as read from a file, category optional
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedTransaction {
    pub date: NaiveDate,
    pub input: TransactionInput,
    pub category: Option<String>,
}

impl ImportedTransaction {
    /// Keep a category from the file, or run the categorizer when there is none
    pub fn into_categorized(self, categorizer: &Categorizer) -> CategorizedTransaction {
        match self.category {
            Some(category) => {
                let input = self.input;
                CategorizedTransaction {
                    date: self.date,
                    description: input.description,
                    merchant_name: input.merchant_name,
                    amount: input.amount,
                    raw_category: input.raw_category,
                    category,
                    confidence: None,
                }
            }
            None => categorizer.apply(self.input, self.date),
        }
    }
}

/// Column positions resolved from the header row
struct Columns {
    date: usize,
    description: usize,
    merchant: Option<usize>,
    amount: usize,
    category: Option<usize>,
}

fn find_column(headers: &StringRecord, names: &[&str]) -> Option<usize> {
    headers.iter().position(|h| {
        let h = h.trim();
        names.iter().any(|n| h.eq_ignore_ascii_case(n))
    })
}

fn require_column(headers: &StringRecord, names: &[&str]) -> Result<usize> {
    find_column(headers, names)
        .ok_or_else(|| Error::Import(format!("Missing required column: {}", names[0])))
}

fn optional_field(record: &StringRecord, index: Option<usize>) -> Option<String> {
    index
        .and_then(|i| record.get(i))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Parse a date in any of the supported formats
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .ok_or_else(|| Error::InvalidData(format!("Invalid date: {}", value)))
}

/// Parse an amount, tolerating `$`, thousands separators, and surrounding spaces
///
/// Commas must separate groups of three digits in the integer part, so
/// `1,234.56` parses but `1,2,3` does not.
pub fn parse_amount(value: &str) -> Result<f64> {
    let invalid = || Error::InvalidData(format!("Invalid amount: {}", value));

    let cleaned: String = value.trim().chars().filter(|c| *c != '$').collect();
    if cleaned.contains(',') && !valid_grouping(&cleaned) {
        return Err(invalid());
    }

    cleaned
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|a| a.is_finite())
        .ok_or_else(invalid)
}

fn valid_grouping(amount: &str) -> bool {
    let unsigned = amount.trim_start_matches(['-', '+']);
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    if fraction.contains(',') {
        return false;
    }

    let mut groups = integer.split(',');
    let leading_ok = groups
        .next()
        .map_or(false, |g| (1..=3).contains(&g.len()));
    leading_ok && groups.all(|g| g.len() == 3)
}

/// Parse a transactions CSV
pub fn parse_transactions<R: Read>(reader: R) -> Result<Vec<ImportedTransaction>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let columns = Columns {
        date: require_column(&headers, &["Date", "Transaction Date"])?,
        description: require_column(&headers, &["Description"])?,
        merchant: find_column(&headers, &["Merchant", "Merchant Name"]),
        amount: require_column(&headers, &["Amount"])?,
        category: find_column(&headers, &["Category"]),
    };

    let mut transactions = Vec::new();
    for (index, result) in rdr.records().enumerate() {
        let record = result?;
        // Header is line 1
        let line = index + 2;

        let field = |i: usize, name: &str| {
            record
                .get(i)
                .map(str::trim)
                .ok_or_else(|| Error::Import(format!("Line {}: missing {}", line, name)))
        };

        let date = parse_date(field(columns.date, "date")?)
            .map_err(|e| Error::Import(format!("Line {}: {}", line, e)))?;
        let description = field(columns.description, "description")?.to_string();
        if description.is_empty() {
            return Err(Error::Import(format!("Line {}: empty description", line)));
        }
        let amount = parse_amount(field(columns.amount, "amount")?)
            .map_err(|e| Error::Import(format!("Line {}: {}", line, e)))?;

        let mut input = TransactionInput::new(description, amount);
        input.merchant_name = optional_field(&record, columns.merchant);

        transactions.push(ImportedTransaction {
            date,
            input,
            category: optional_field(&record, columns.category),
        });
    }

    debug!(count = transactions.len(), "Parsed transactions CSV");
    Ok(transactions)
}

/// Parse a transactions CSV and categorize rows that have no category
pub fn load_transactions<R: Read>(
    reader: R,
    categorizer: &Categorizer,
) -> Result<Vec<CategorizedTransaction>> {
    let imported = parse_transactions(reader)?;
    let needing_category = imported.iter().filter(|t| t.category.is_none()).count();
    debug!(
        total = imported.len(),
        categorized = needing_category,
        "Categorizing imported transactions"
    );
    Ok(imported
        .into_iter()
        .map(|t| t.into_categorized(categorizer))
        .collect())
}

/// Parse a budgets CSV
pub fn parse_budgets<R: Read>(reader: R) -> Result<Vec<Budget>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let category_col = require_column(&headers, &["Category"])?;
    let limit_col = require_column(&headers, &["Monthly Limit", "Limit", "Monthly_Limit"])?;

    let mut budgets = Vec::new();
    for (index, result) in rdr.records().enumerate() {
        let record = result?;
        let line = index + 2;

        let category = record
            .get(category_col)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::Import(format!("Line {}: missing category", line)))?;
        let limit = record
            .get(limit_col)
            .ok_or_else(|| Error::Import(format!("Line {}: missing limit", line)))
            .and_then(|v| {
                parse_amount(v).map_err(|e| Error::Import(format!("Line {}: {}", line, e)))
            })?;

        if limit <= 0.0 {
            warn!(line, category, limit, "Budget has no positive limit");
        }
        budgets.push(Budget::new(category, limit));
    }

    Ok(budgets)
}
