//! Fiscal period types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Reporting periodicity for a financial statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Periodicity {
    /// One column per calendar month.
    Monthly,
    /// One column per quarter.
    Quarterly,
    /// One column per half year.
    HalfYearly,
    /// One column per fiscal year.
    Yearly,
}

/// How the reporting window is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterBasedOn {
    /// Window spans a fiscal year range.
    FiscalYear,
    /// Window spans an explicit start/end date pair.
    DateRange,
}

/// A resolved reporting period.
///
/// Periods are produced by the host framework's period resolver and are
/// immutable once resolved. `key` names the report column that carries this
/// period's balances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// Stable column key (e.g. `"2024"` or `"jan_2024"`).
    pub key: String,
    /// Human-readable label (e.g. `"2024"` or `"Jan 2024"`).
    pub label: String,
    /// Start date of the period.
    pub start_date: NaiveDate,
    /// End date of the period.
    pub end_date: NaiveDate,
}

impl Period {
    /// Returns true if the given date falls within this period.
    #[must_use]
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}
