//! Fiscal period handling.

pub mod period;

pub use period::{FilterBasedOn, Period, Periodicity};
