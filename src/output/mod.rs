//! Comparison reports and their renderings

pub mod report;
pub mod formatter;

pub use formatter::{OutputFormatter, ReportGenerator};
pub use report::ComparisonReport;
