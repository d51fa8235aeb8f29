//! Command implementations

pub mod check;
pub mod simple;

pub use check::{CheckConfig, CheckEntry, CheckResult, check_words};
pub use simple::run_simple;
