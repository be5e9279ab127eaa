//! Report summary figures.

use rust_decimal::Decimal;

use super::provisional::PROVISIONAL_PROFIT_LOSS_LABEL;
use super::types::{CategorySet, Datatype, Indicator, ReportFilters, ReportRow, SummaryFigure};
use crate::fiscal::Period;

/// Headline summary: the four figures plus the raw balance check value.
#[derive(Debug)]
pub struct ReportSummary {
    /// Ordered figures: total asset, total liability, total equity,
    /// provisional profit/loss.
    pub figures: Vec<SummaryFigure>,
    /// Raw `assets - liabilities + equity`, surfaced for validation
    /// downstream (zero in a balanced ledger).
    pub balance_check: Decimal,
}

/// Builds the headline figures over the selected period subset.
///
/// The accumulated view collapses the selection to the last period; the
/// consolidated view then filters it through `consolidate` (supplied by the
/// caller from the host framework).
#[must_use]
pub fn build_report_summary<F>(
    periods: &[Period],
    categories: &CategorySet,
    provisional: Option<&ReportRow>,
    currency: &str,
    filters: &ReportFilters,
    consolidate: F,
) -> ReportSummary
where
    F: FnOnce(&[Period]) -> Vec<Period>,
{
    let mut selected: Vec<Period> = periods.to_vec();
    if filters.accumulated_values {
        selected = selected.last().cloned().into_iter().collect();
    }
    if filters.accumulated_in_group_company {
        selected = consolidate(&selected);
    }

    let mut net_asset = Decimal::ZERO;
    let mut net_liability = Decimal::ZERO;
    let mut net_equity = Decimal::ZERO;
    let mut net_provisional = Decimal::ZERO;

    for period in &selected {
        if !categories.asset.is_empty() {
            net_asset += categories.asset.period_total(&period.key);
        }
        if categories.liability.has_totals() {
            net_liability += categories.liability.period_total(&period.key);
        }
        if categories.equity.has_totals() {
            net_equity += categories.equity.period_total(&period.key);
        }
        if let Some(row) = provisional {
            net_provisional += row.value(&period.key);
        }
    }

    let indicator = if net_provisional > Decimal::ZERO {
        Indicator::Positive
    } else {
        Indicator::Negative
    };

    let figures = vec![
        figure(net_asset, "Total Asset", currency),
        figure(net_liability, "Total Liability", currency),
        figure(net_equity, "Total Equity", currency),
        SummaryFigure {
            indicator: Some(indicator),
            ..figure(net_provisional, PROVISIONAL_PROFIT_LOSS_LABEL, currency)
        },
    ];

    ReportSummary {
        figures,
        balance_check: net_asset - net_liability + net_equity,
    }
}

fn figure(value: Decimal, label: &str, currency: &str) -> SummaryFigure {
    SummaryFigure {
        value,
        label: label.to_string(),
        datatype: Datatype::Currency,
        indicator: None,
        currency: Some(currency.to_string()),
    }
}
