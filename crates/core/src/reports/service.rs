//! Balance sheet report orchestration.

use folio_shared::ReportingConfig;
use folio_shared::types::AccountId;
use rust_decimal::Decimal;
use tracing::{debug, info};

use super::error::ReportError;
use super::opening::{self, UNCLOSED_LABEL, UNRECONCILED_MESSAGE};
use super::provisional::{self, ProvisionalRows};
use super::schedule::{ScheduleGrouper, SummableFields};
use super::source::BalanceSource;
use super::summary;
use super::types::{
    BalanceSheet, CategoryRows, CategorySet, ReportColumn, ReportFilters, ReportRow, RootCategory,
};
use crate::fiscal::Period;

/// Service producing the schedule-grouped balance sheet.
///
/// One [`BalanceSheetService::execute`] call performs three sequential
/// category fetches followed by a pure in-memory transformation; the service
/// holds no per-call state.
pub struct BalanceSheetService<S> {
    source: S,
    config: ReportingConfig,
}

impl<S: BalanceSource> BalanceSheetService<S> {
    /// Creates a service over a balance source.
    #[must_use]
    pub fn new(source: S, config: ReportingConfig) -> Self {
        Self { source, config }
    }

    /// Generates the report for one set of filters.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::NoPeriods`] when the period resolver yields an
    /// empty sequence, or a source error from any collaborator call.
    /// Degraded data (absent categories, missing values) never errors.
    pub fn execute(&self, filters: &ReportFilters) -> Result<BalanceSheet, ReportError> {
        let periods = self.source.resolve_periods(filters)?;
        if periods.is_empty() {
            return Err(ReportError::NoPeriods);
        }
        debug!(periods = periods.len(), "resolved reporting periods");

        let currency = filters
            .presentation_currency
            .clone()
            .unwrap_or_else(|| self.source.company_currency(&filters.company));

        let categories = CategorySet {
            asset: self.fetch(RootCategory::Asset, &periods, filters)?,
            liability: self.fetch(RootCategory::Liability, &periods, filters)?,
            equity: self.fetch(RootCategory::Equity, &periods, filters)?,
        };

        let ProvisionalRows {
            mut profit_loss,
            total_credit,
        } = provisional::provisional_profit_loss(&categories, &periods, &currency);

        let opening_delta =
            opening::check_opening_balance(&categories, self.config.float_precision);
        let message = opening_delta
            .is_some()
            .then(|| UNRECONCILED_MESSAGE.to_string());

        let mut data: Vec<ReportRow> = Vec::new();
        data.extend(categories.asset.rows.iter().cloned());
        data.extend(categories.liability.rows.iter().cloned());
        data.extend(categories.equity.rows.iter().cloned());

        if let Some(delta) = opening_delta {
            debug!(%delta, "prior fiscal year not closed");
            data.push(unclosed_row(delta, &periods, &currency));

            // Remove the unreconciled carry-over from the provisional line so
            // it is not counted twice. The running total stays as derived.
            if let Some(row) = profit_loss.as_mut() {
                for period in &periods {
                    let adjusted = row.value(&period.key) - delta;
                    row.values.insert(period.key.clone(), adjusted);
                }
            }
        }

        if let Some(row) = profit_loss.clone() {
            data.push(row);
        }
        if let Some(row) = total_credit {
            data.push(row);
        }

        let mut columns = self.source.columns(
            filters.periodicity,
            &periods,
            filters.accumulated_values,
            &filters.company,
        );
        let summable = SummableFields::from_columns(&columns);

        let assignments = self.source.schedule_assignments()?;
        let grouper = ScheduleGrouper::new(&assignments, summable);
        let rows = grouper.group(data);
        debug!(rows = rows.len(), "grouped rows by schedule");

        columns.insert(0, ReportColumn::schedule());

        let summary = summary::build_report_summary(
            &periods,
            &categories,
            profit_loss.as_ref(),
            &currency,
            filters,
            |selection| self.source.consolidated_periods(filters, selection),
        );

        info!(
            company = %filters.company,
            rows = rows.len(),
            unreconciled = opening_delta.is_some(),
            "balance sheet assembled"
        );

        Ok(BalanceSheet {
            columns,
            rows,
            message,
            chart: None,
            summary: summary.figures,
            balance_check: summary.balance_check,
        })
    }

    fn fetch(
        &self,
        category: RootCategory,
        periods: &[Period],
        filters: &ReportFilters,
    ) -> Result<CategoryRows, ReportError> {
        let rows = self.source.category_rows(
            category,
            category.normal_balance_side(),
            periods,
            false,
            filters,
        )?;
        debug!(?category, rows = rows.len(), "fetched category rows");
        Ok(CategoryRows::new(rows))
    }
}

/// Synthesizes the row carrying an unreconciled prior-year delta in every
/// period column.
fn unclosed_row(delta: Decimal, periods: &[Period], currency: &str) -> ReportRow {
    let mut row = ReportRow {
        account: Some(AccountId::from(UNCLOSED_LABEL)),
        account_name: Some(UNCLOSED_LABEL.to_string()),
        warn_if_negative: true,
        currency: Some(currency.to_string()),
        total: Some(delta),
        ..ReportRow::default()
    };
    for period in periods {
        row.values.insert(period.key.clone(), delta);
    }
    row
}
