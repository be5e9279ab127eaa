//! Schedule-grouped balance sheet generation.
//!
//! This module aggregates per-account balances across fiscal periods, groups
//! leaf accounts under user-defined schedule labels with inserted subtotal
//! rows, and derives the headline figures (total assets, liabilities, equity,
//! provisional profit/loss). The host ERP framework is reached through the
//! [`source::BalanceSource`] seam; everything here is a pure, synchronous
//! transformation of the rows it returns.

pub mod error;
pub mod opening;
pub mod provisional;
pub mod schedule;
pub mod service;
pub mod source;
pub mod summary;
pub mod types;


pub use error::ReportError;
pub use service::BalanceSheetService;
pub use source::BalanceSource;
pub use types::*;
