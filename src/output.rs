//! Output formatting for grade reports.
//!
//! Supports pretty-printing via tracing and JSON serialization.

use anyhow::Result;
use tracing::{debug, info};

use crate::grading::types::GradeReport;

/// Logs a grade report using Rust's debug pretty-print format.
pub fn print_pretty(report: &GradeReport) {
    debug!("{:#?}", report);
}

/// Logs a grade report as pretty-printed JSON.
pub fn print_json(report: &GradeReport) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Renders a grade report as a pretty-printed JSON string.
pub fn to_json(report: &GradeReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
