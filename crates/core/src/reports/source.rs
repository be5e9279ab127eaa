//! Collaborator seam to the host ERP framework.

use std::collections::HashMap;

use folio_shared::types::{AccountId, CompanyId};

use super::error::ReportError;
use super::types::{BalanceSide, ReportColumn, ReportFilters, ReportRow, RootCategory};
use crate::fiscal::{Period, Periodicity};

/// Read-only view of the host ERP required to build a balance sheet.
///
/// Implemented by the host framework: period resolution, ledger queries,
/// column formatting, and chart-of-accounts metadata. One report invocation
/// calls these synchronously, in a fixed order, and holds no state
/// afterwards.
pub trait BalanceSource {
    /// Resolves the ordered period sequence for the requested window.
    fn resolve_periods(&self, filters: &ReportFilters) -> Result<Vec<Period>, ReportError>;

    /// Returns the ordered row sequence for one root category.
    ///
    /// `only_current_year` restricts balances to the current fiscal year;
    /// the balance sheet always passes `false` since it reads carried-over
    /// balances. The sequence must end with the category total row followed
    /// by a closing marker row: blank on a normally closed prior year, or
    /// carrying `opening_balance` when it was left open.
    fn category_rows(
        &self,
        category: RootCategory,
        side: BalanceSide,
        periods: &[Period],
        only_current_year: bool,
        filters: &ReportFilters,
    ) -> Result<Vec<ReportRow>, ReportError>;

    /// Resolves the period columns for the report grid.
    fn columns(
        &self,
        periodicity: Periodicity,
        periods: &[Period],
        accumulated: bool,
        company: &CompanyId,
    ) -> Vec<ReportColumn>;

    /// Accounts carrying a non-empty schedule label.
    fn schedule_assignments(&self) -> Result<HashMap<AccountId, String>, ReportError>;

    /// Default currency of a company.
    fn company_currency(&self, company: &CompanyId) -> String;

    /// Subset of periods retained for the consolidated summary view.
    ///
    /// The default keeps every period.
    fn consolidated_periods(&self, _filters: &ReportFilters, periods: &[Period]) -> Vec<Period> {
        periods.to_vec()
    }
}
