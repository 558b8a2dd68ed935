//! Date windows for selecting the transactions each analysis looks at

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::CategorizedTransaction;

/// A half-open date range `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The `days` days ending on (and including) `as_of`
    ///
    /// Windows reaching past the calendar range are clamped to `NaiveDate::MIN`.
    pub fn trailing(as_of: NaiveDate, days: u32) -> Self {
        let end = day_after(as_of);
        Self::new(saturating_sub(end, Duration::days(i64::from(days))), end)
    }

    /// The window of equal length immediately before this one
    pub fn preceding(&self) -> Self {
        let length = self.end - self.start;
        Self::new(saturating_sub(self.start, length), self.start)
    }

    /// From the first of `as_of`'s month through `as_of`
    pub fn month_to_date(as_of: NaiveDate) -> Self {
        let start = as_of.with_day(1).unwrap_or(as_of);
        Self::new(start, day_after(as_of))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }

    /// Transactions dated inside this window, in input order
    pub fn filter(&self, transactions: &[CategorizedTransaction]) -> Vec<CategorizedTransaction> {
        transactions
            .iter()
            .filter(|tx| self.contains(tx.date))
            .cloned()
            .collect()
    }
}

fn saturating_sub(date: NaiveDate, span: Duration) -> NaiveDate {
    date.checked_sub_signed(span).unwrap_or(NaiveDate::MIN)
}

fn day_after(date: NaiveDate) -> NaiveDate {
    date.succ_opt().unwrap_or(NaiveDate::MAX)
}

/// Split into the current `days` window ending at `as_of` and the one before it
pub fn split_windows(
    transactions: &[CategorizedTransaction],
    as_of: NaiveDate,
    days: u32,
) -> (Vec<CategorizedTransaction>, Vec<CategorizedTransaction>) {
    let current = Period::trailing(as_of, days);
    let previous = current.preceding();
    (current.filter(transactions), previous.filter(transactions))
}
