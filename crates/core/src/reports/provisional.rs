//! Provisional profit/loss derivation.

use folio_shared::types::AccountId;
use rust_decimal::Decimal;

use super::types::{CategorySet, ReportRow};
use crate::fiscal::Period;

/// Label of the provisional profit/loss row.
pub const PROVISIONAL_PROFIT_LOSS_LABEL: &str = "Provisional Profit / Loss (Credit)";

/// Label of the total-credit check row.
pub const TOTAL_CREDIT_LABEL: &str = "Total (Credit)";

/// Provisional profit/loss row plus its parallel total-credit check row.
#[derive(Debug, Default)]
pub struct ProvisionalRows {
    /// `assets - (liabilities + equity)` per period, with a running total.
    /// `None` when the asset category is absent or every period nets to zero
    /// (an all-zero result means "no provisional line").
    pub profit_loss: Option<ReportRow>,
    /// Reconstructed total assets per period, with its own running total.
    /// `None` only when the asset category is absent.
    pub total_credit: Option<ReportRow>,
}

/// Derives the provisional profit/loss figures from the category row sets.
///
/// Liability and equity totals participate only when their sequence
/// terminated normally (blank closing marker); an absent or abnormally
/// terminated category contributes zero.
#[must_use]
pub fn provisional_profit_loss(
    categories: &CategorySet,
    periods: &[Period],
    currency: &str,
) -> ProvisionalRows {
    if categories.asset.is_empty() {
        return ProvisionalRows::default();
    }

    let mut profit_loss = summary_row(PROVISIONAL_PROFIT_LOSS_LABEL, currency);
    let mut total_credit = summary_row(TOTAL_CREDIT_LABEL, currency);

    let mut running = Decimal::ZERO;
    let mut credit_running = Decimal::ZERO;
    let mut has_value = false;

    for period in periods {
        let total_assets = categories.asset.period_total(&period.key);

        let mut effective_liability = Decimal::ZERO;
        if categories.liability.has_totals() {
            effective_liability += categories.liability.period_total(&period.key);
        }
        if categories.equity.has_totals() {
            effective_liability += categories.equity.period_total(&period.key);
        }

        let value = total_assets - effective_liability;
        profit_loss.values.insert(period.key.clone(), value);
        total_credit
            .values
            .insert(period.key.clone(), value + effective_liability);

        if !value.is_zero() {
            has_value = true;
        }

        running += value;
        profit_loss.total = Some(running);

        credit_running += value + effective_liability;
        total_credit.total = Some(credit_running);
    }

    ProvisionalRows {
        profit_loss: has_value.then_some(profit_loss),
        total_credit: Some(total_credit),
    }
}

fn summary_row(label: &str, currency: &str) -> ReportRow {
    ReportRow {
        account: Some(AccountId::from(label)),
        account_name: Some(label.to_string()),
        warn_if_negative: true,
        currency: Some(currency.to_string()),
        ..ReportRow::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::types::CategoryRows;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn period(key: &str) -> Period {
        Period {
            key: key.to_string(),
            label: key.to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 31).expect("valid date"),
        }
    }

    fn category(values: &[(&str, Decimal)]) -> CategoryRows {
        let mut total = ReportRow::default();
        for (key, value) in values {
            total.values.insert((*key).to_string(), *value);
        }
        CategoryRows::new(vec![total, ReportRow::default()])
    }

    #[test]
    fn test_empty_asset_yields_no_rows() {
        let categories = CategorySet {
            asset: CategoryRows::default(),
            liability: category(&[("2024", dec!(300))]),
            equity: category(&[("2024", dec!(250))]),
        };

        let rows = provisional_profit_loss(&categories, &[period("2024")], "USD");

        assert!(rows.profit_loss.is_none());
        assert!(rows.total_credit.is_none());
    }

    #[test]
    fn test_profit_loss_and_total_credit_values() {
        let categories = CategorySet {
            asset: category(&[("2024", dec!(550)), ("2025", dec!(700))]),
            liability: category(&[("2024", dec!(300)), ("2025", dec!(300))]),
            equity: category(&[("2024", dec!(100)), ("2025", dec!(100))]),
        };

        let rows =
            provisional_profit_loss(&categories, &[period("2024"), period("2025")], "USD");

        let profit_loss = rows.profit_loss.expect("non-zero result");
        assert_eq!(
            profit_loss.account_name.as_deref(),
            Some(PROVISIONAL_PROFIT_LOSS_LABEL)
        );
        assert_eq!(profit_loss.value("2024"), dec!(150));
        assert_eq!(profit_loss.value("2025"), dec!(300));
        assert_eq!(profit_loss.total, Some(dec!(450)));
        assert!(profit_loss.warn_if_negative);

        // The check row reconstructs total assets period by period.
        let total_credit = rows.total_credit.expect("asset present");
        assert_eq!(
            total_credit.account_name.as_deref(),
            Some(TOTAL_CREDIT_LABEL)
        );
        assert_eq!(total_credit.value("2024"), dec!(550));
        assert_eq!(total_credit.value("2025"), dec!(700));
        assert_eq!(total_credit.total, Some(dec!(1250)));
    }

    #[test]
    fn test_abnormal_marker_excludes_category_total() {
        let mut liability_total = ReportRow::default();
        liability_total.values.insert("2024".to_string(), dec!(300));
        let marker = ReportRow {
            opening_balance: Some(dec!(100)),
            ..ReportRow::default()
        };

        let categories = CategorySet {
            asset: category(&[("2024", dec!(550))]),
            liability: CategoryRows::new(vec![liability_total, marker]),
            equity: CategoryRows::default(),
        };

        let rows = provisional_profit_loss(&categories, &[period("2024")], "USD");

        // Liability total is not usable, so the full asset value remains.
        let profit_loss = rows.profit_loss.expect("non-zero result");
        assert_eq!(profit_loss.value("2024"), dec!(550));
    }

    #[test]
    fn test_all_zero_result_omits_profit_loss_row() {
        let categories = CategorySet {
            asset: category(&[("2024", dec!(400))]),
            liability: category(&[("2024", dec!(300))]),
            equity: category(&[("2024", dec!(100))]),
        };

        let rows = provisional_profit_loss(&categories, &[period("2024")], "USD");

        assert!(rows.profit_loss.is_none());

        // The check row is still produced.
        let total_credit = rows.total_credit.expect("asset present");
        assert_eq!(total_credit.value("2024"), dec!(400));
    }
}
