//! Report data types.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use folio_shared::types::{AccountId, CompanyId, FiscalYearId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::fiscal::{FilterBasedOn, Periodicity};

/// Root category of a balance sheet section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RootCategory {
    /// Asset accounts (debit-normal).
    Asset,
    /// Liability accounts (credit-normal).
    Liability,
    /// Equity accounts (credit-normal).
    Equity,
}

impl RootCategory {
    /// The ledger side a balance of this category normally sits on.
    #[must_use]
    pub const fn normal_balance_side(self) -> BalanceSide {
        match self {
            Self::Asset => BalanceSide::Debit,
            Self::Liability | Self::Equity => BalanceSide::Credit,
        }
    }
}

/// Debit or credit side of the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceSide {
    /// Debit-normal balances.
    Debit,
    /// Credit-normal balances.
    Credit,
}

/// Input contract of one report invocation.
///
/// All fields are assumed validated upstream; the engine never rejects a
/// well-formed filter set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportFilters {
    /// Company the report is generated for.
    pub company: CompanyId,
    /// First fiscal year of the reporting window.
    pub from_fiscal_year: FiscalYearId,
    /// Last fiscal year of the reporting window.
    pub to_fiscal_year: FiscalYearId,
    /// Explicit window start, when filtering by date range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_start_date: Option<NaiveDate>,
    /// Explicit window end, when filtering by date range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_end_date: Option<NaiveDate>,
    /// Whether the window is derived from fiscal years or explicit dates.
    pub filter_based_on: FilterBasedOn,
    /// Column granularity.
    pub periodicity: Periodicity,
    /// Currency to present figures in; the company default applies when
    /// absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presentation_currency: Option<String>,
    /// Accumulated view: balances carried forward across the window.
    #[serde(default)]
    pub accumulated_values: bool,
    /// Consolidated view: figures aggregated across a company group.
    #[serde(default)]
    pub accumulated_in_group_company: bool,
    /// Whether default finance book entries participate in the balances.
    /// Carried to the balance source untouched.
    #[serde(default = "default_true")]
    pub include_default_book_entries: bool,
}

fn default_true() -> bool {
    true
}

/// One row of the report grid.
///
/// Per-period amounts live in [`ReportRow::values`], keyed by
/// [`crate::fiscal::Period::key`], and serialize flattened to top-level
/// fields — the shape the host framework renders. [`ReportRow::default`] is
/// the blank marker row a balance provider appends after each category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Account this row represents; absent on synthetic rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<AccountId>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    /// Schedule label; set on schedule header rows, cleared on grouped
    /// leaves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    /// True for group (non-leaf) accounts and synthetic header/subtotal rows.
    #[serde(default)]
    pub is_group: bool,
    /// Tree indentation level.
    #[serde(default)]
    pub indent: u32,
    /// Parent account in the chart of accounts tree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_account: Option<AccountId>,
    /// Unreconciled balance carried over from a prior fiscal year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_balance: Option<Decimal>,
    /// Currency the amounts are presented in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Hint for the renderer to highlight negative values.
    #[serde(default)]
    pub warn_if_negative: bool,
    /// Row total across all periods.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<Decimal>,
    /// Per-period amounts keyed by period key.
    #[serde(flatten)]
    pub values: BTreeMap<String, Decimal>,
}

impl ReportRow {
    /// Returns true if this is the blank marker row.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }

    /// Reads a period amount; absent values read as zero.
    #[must_use]
    pub fn value(&self, key: &str) -> Decimal {
        self.values.get(key).copied().unwrap_or(Decimal::ZERO)
    }
}

/// Row sequence returned by the balance provider for one root category.
///
/// The sequence shape is part of the provider contract: the last element is a
/// closing marker (blank, or carrying `opening_balance` when the prior fiscal
/// year was not closed) and the second-to-last is the category total row.
/// Altering this shape silently breaks the provisional profit/loss math, so
/// it is preserved as-is and read through the named accessors below.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryRows {
    /// Ordered rows, sentinel rows included.
    pub rows: Vec<ReportRow>,
}

impl CategoryRows {
    /// Wraps a provider row sequence.
    #[must_use]
    pub fn new(rows: Vec<ReportRow>) -> Self {
        Self { rows }
    }

    /// True when the provider returned nothing at all for this category.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The closing marker row (last element), if any.
    #[must_use]
    pub fn closing_marker(&self) -> Option<&ReportRow> {
        self.rows.last()
    }

    /// The category total row (second-to-last element), if any.
    #[must_use]
    pub fn total_row(&self) -> Option<&ReportRow> {
        self.rows.len().checked_sub(2).and_then(|i| self.rows.get(i))
    }

    /// True when the category's totals are usable: the sequence terminated
    /// normally with a blank closing marker.
    #[must_use]
    pub fn has_totals(&self) -> bool {
        self.closing_marker().is_some_and(ReportRow::is_blank)
    }

    /// Category total for one period; zero when the category is absent.
    #[must_use]
    pub fn period_total(&self, key: &str) -> Decimal {
        self.total_row().map_or(Decimal::ZERO, |row| row.value(key))
    }

    /// Opening balance carried on the closing marker; zero when reconciled.
    #[must_use]
    pub fn opening_balance(&self) -> Decimal {
        self.closing_marker()
            .and_then(|row| row.opening_balance)
            .unwrap_or(Decimal::ZERO)
    }
}

/// The three category row sets of one report invocation, in the fixed fetch
/// order.
#[derive(Debug, Clone, Default)]
pub struct CategorySet {
    /// Asset rows (debit-normal).
    pub asset: CategoryRows,
    /// Liability rows (credit-normal).
    pub liability: CategoryRows,
    /// Equity rows (credit-normal).
    pub equity: CategoryRows,
}

/// Column data type, mirroring the host framework's field types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Plain text column.
    Data,
    /// Currency-formatted numeric column.
    Currency,
}

/// One report column descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportColumn {
    /// Column header label.
    pub label: String,
    /// Row field the column reads.
    pub fieldname: String,
    /// Column data type.
    pub fieldtype: ColumnType,
    /// Display width in pixels.
    pub width: u32,
}

impl ReportColumn {
    /// Currency column for a period or total field.
    #[must_use]
    pub fn currency(label: impl Into<String>, fieldname: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            fieldname: fieldname.into(),
            fieldtype: ColumnType::Currency,
            width: 150,
        }
    }

    /// The synthetic text column prepended at position 0 of every report.
    #[must_use]
    pub(crate) fn schedule() -> Self {
        Self {
            label: "Schedule".to_string(),
            fieldname: "schedule".to_string(),
            fieldtype: ColumnType::Data,
            width: 100,
        }
    }
}

/// Datatype of a summary figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Datatype {
    /// Currency-formatted figure.
    Currency,
}

/// Trend indicator attached to a summary figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    /// Figure represents a gain.
    Positive,
    /// Figure represents a loss (or break-even).
    Negative,
}

/// Headline figure shown above the report grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryFigure {
    /// Aggregated amount.
    pub value: Decimal,
    /// Display label.
    pub label: String,
    /// Figure datatype.
    pub datatype: Datatype,
    /// Optional gain/loss indicator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indicator: Option<Indicator>,
    /// Currency the figure is presented in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// Fully assembled balance sheet payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceSheet {
    /// Column descriptors; position 0 is always the synthetic Schedule
    /// column.
    pub columns: Vec<ReportColumn>,
    /// Grouped report rows.
    pub rows: Vec<ReportRow>,
    /// Data-quality notice (unreconciled prior year); not an error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Chart payload slot; this report renders no chart.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart: Option<serde_json::Value>,
    /// Headline summary figures.
    pub summary: Vec<SummaryFigure>,
    /// Raw `assets - liabilities + equity` check value. Non-zero signals a
    /// data inconsistency, surfaced for the caller to act on.
    pub balance_check: Decimal,
}
