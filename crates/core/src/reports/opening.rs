//! Opening balance reconciliation check.

use rust_decimal::Decimal;

use super::types::CategorySet;

/// Message shown when a prior fiscal year was not closed.
pub const UNRECONCILED_MESSAGE: &str = "Previous Financial Year is not closed";

/// Label of the synthesized unclosed-years row.
pub const UNCLOSED_LABEL: &str = "Unclosed Fiscal Years Profit / Loss (Credit)";

/// Detects an unreconciled prior-year balance.
///
/// Combines the opening balances carried on the category closing markers as
/// `asset - liability - equity`, rounding every term and the final result to
/// `precision` decimal places. Returns the non-zero delta, or `None` when
/// the prior year is fully reconciled.
#[must_use]
pub fn check_opening_balance(categories: &CategorySet, precision: u32) -> Option<Decimal> {
    let mut opening = Decimal::ZERO;
    if !categories.asset.is_empty() {
        opening = categories.asset.opening_balance().round_dp(precision);
    }
    if !categories.liability.is_empty() {
        opening -= categories.liability.opening_balance().round_dp(precision);
    }
    if !categories.equity.is_empty() {
        opening -= categories.equity.opening_balance().round_dp(precision);
    }

    let opening = opening.round_dp(precision);
    (!opening.is_zero()).then_some(opening)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::types::{CategoryRows, ReportRow};
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn category_with_opening(opening: Option<Decimal>) -> CategoryRows {
        let marker = ReportRow {
            opening_balance: opening,
            ..ReportRow::default()
        };
        CategoryRows::new(vec![ReportRow::default(), marker])
    }

    fn categories(
        asset: Option<Decimal>,
        liability: Option<Decimal>,
        equity: Option<Decimal>,
    ) -> CategorySet {
        CategorySet {
            asset: category_with_opening(asset),
            liability: category_with_opening(liability),
            equity: category_with_opening(equity),
        }
    }

    #[test]
    fn test_reconciled_prior_year_signals_nothing() {
        let delta = check_opening_balance(&categories(None, None, None), 2);
        assert!(delta.is_none());
    }

    #[test]
    fn test_balanced_openings_cancel_out() {
        let delta = check_opening_balance(
            &categories(Some(dec!(400)), Some(dec!(300)), Some(dec!(100))),
            2,
        );
        assert!(delta.is_none());
    }

    #[rstest]
    #[case(dec!(550), dec!(300), dec!(100), dec!(150))]
    #[case(dec!(0), dec!(100), dec!(0), dec!(-100))]
    #[case(dec!(100.005), dec!(0), dec!(0), dec!(100.00))]
    #[case(dec!(100.015), dec!(0), dec!(0), dec!(100.02))]
    fn test_delta_combination_and_rounding(
        #[case] asset: Decimal,
        #[case] liability: Decimal,
        #[case] equity: Decimal,
        #[case] expected: Decimal,
    ) {
        let delta =
            check_opening_balance(&categories(Some(asset), Some(liability), Some(equity)), 2);
        assert_eq!(delta, Some(expected));
    }

    #[test]
    fn test_sub_precision_delta_rounds_to_zero() {
        let delta = check_opening_balance(&categories(Some(dec!(0.001)), None, None), 2);
        assert!(delta.is_none());
    }

    #[test]
    fn test_absent_categories_contribute_zero() {
        let set = CategorySet {
            asset: category_with_opening(Some(dec!(75))),
            liability: CategoryRows::default(),
            equity: CategoryRows::default(),
        };
        assert_eq!(check_opening_balance(&set, 2), Some(dec!(75)));
    }
}
