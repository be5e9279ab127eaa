//! Schedule grouping pass.
//!
//! Re-partitions the flat account row list into schedule-labeled groups with
//! inserted subtotal rows. A schedule opens when a group account carrying a
//! schedule label is reached and closes at the next group boundary; at most
//! one schedule is open at a time.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use folio_shared::types::AccountId;
use rust_decimal::Decimal;

use super::types::{ColumnType, ReportColumn, ReportRow};

/// Display name of an inserted schedule subtotal row.
pub const SUBTOTAL_NAME: &str = "Total";

/// Row field carrying the cross-period total.
const TOTAL_FIELD: &str = "total";

/// Field names whose values are summed into schedule subtotals.
#[derive(Debug, Clone)]
pub struct SummableFields(BTreeSet<String>);

impl SummableFields {
    /// Derives the summable set from the resolved report columns: every
    /// currency column plus the row total.
    #[must_use]
    pub fn from_columns(columns: &[ReportColumn]) -> Self {
        let mut fields: BTreeSet<String> = columns
            .iter()
            .filter(|column| column.fieldtype == ColumnType::Currency)
            .map(|column| column.fieldname.clone())
            .collect();
        fields.insert(TOTAL_FIELD.to_string());
        Self(fields)
    }

    fn contains(&self, field: &str) -> bool {
        self.0.contains(field)
    }
}

/// Single forward pass grouping rows under their schedule labels.
///
/// Holds the read-only schedule assignment mapping and the summable field
/// set for one report invocation; the running accumulator lives only inside
/// [`ScheduleGrouper::group`] and is discarded afterwards.
#[derive(Debug)]
pub struct ScheduleGrouper<'a> {
    assignments: &'a HashMap<AccountId, String>,
    summable: SummableFields,
}

impl<'a> ScheduleGrouper<'a> {
    /// Creates a grouper over a schedule assignment mapping.
    #[must_use]
    pub fn new(assignments: &'a HashMap<AccountId, String>, summable: SummableFields) -> Self {
        Self {
            assignments,
            summable,
        }
    }

    /// Runs the grouping pass over the concatenated row list.
    ///
    /// Rows keep their relative input order; the inserted subtotal rows
    /// appear immediately before the boundary that ends their schedule, and
    /// a pending subtotal is flushed once more when the list ends.
    #[must_use]
    pub fn group(&self, rows: Vec<ReportRow>) -> Vec<ReportRow> {
        let mut out = Vec::with_capacity(rows.len());
        let mut current_schedule: Option<String> = None;
        let mut accumulator: BTreeMap<String, Decimal> = BTreeMap::new();

        for row in rows {
            // A group row with no parent is a redundant top-of-category
            // header; it neither closes nor contributes to a schedule.
            if row.is_group && row.parent_account.is_none() {
                continue;
            }

            let schedule = row
                .account
                .as_ref()
                .and_then(|account| self.assignments.get(account))
                .cloned();

            if row.is_group {
                if let Some(label) = schedule {
                    flush_subtotal(&mut out, current_schedule.as_deref(), &accumulator);
                    out.push(header_row(&label, row.account_name));
                    current_schedule = Some(label);
                    accumulator.clear();
                    continue;
                }
            } else if current_schedule.is_some() {
                let mut leaf = row;
                leaf.schedule = None;
                self.accumulate(&mut accumulator, &leaf);
                out.push(leaf);
                continue;
            }

            flush_subtotal(&mut out, current_schedule.as_deref(), &accumulator);
            current_schedule = None;
            accumulator.clear();
            out.push(row);
        }

        flush_subtotal(&mut out, current_schedule.as_deref(), &accumulator);
        out
    }

    fn accumulate(&self, accumulator: &mut BTreeMap<String, Decimal>, row: &ReportRow) {
        for (key, value) in &row.values {
            if self.summable.contains(key) {
                *accumulator.entry(key.clone()).or_insert(Decimal::ZERO) += *value;
            }
        }
        if let Some(total) = row.total {
            if self.summable.contains(TOTAL_FIELD) {
                *accumulator
                    .entry(TOTAL_FIELD.to_string())
                    .or_insert(Decimal::ZERO) += total;
            }
        }
    }
}

/// Emits the pending subtotal row, if a schedule is open.
fn flush_subtotal(
    out: &mut Vec<ReportRow>,
    current_schedule: Option<&str>,
    accumulator: &BTreeMap<String, Decimal>,
) {
    if current_schedule.is_none() {
        return;
    }

    let mut row = ReportRow {
        account_name: Some(SUBTOTAL_NAME.to_string()),
        indent: 1,
        is_group: true,
        ..ReportRow::default()
    };
    for (key, value) in accumulator {
        if key == TOTAL_FIELD {
            row.total = Some(*value);
        } else {
            row.values.insert(key.clone(), *value);
        }
    }
    out.push(row);
}

fn header_row(label: &str, account_name: Option<String>) -> ReportRow {
    ReportRow {
        schedule: Some(label.to_string()),
        account_name,
        indent: 0,
        is_group: true,
        ..ReportRow::default()
    }
}
