//! Report error types.

use thiserror::Error;

/// Errors that can occur during report generation.
///
/// Degraded data never aborts a report: absent categories contribute zero
/// and missing values read as zero. Only collaborator failures and an empty
/// period resolution surface as errors.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The period resolver produced no periods for the requested range.
    #[error("no reporting periods resolved for the requested range")]
    NoPeriods,

    /// A balance source call failed.
    #[error("balance source error: {0}")]
    Source(String),
}
