// src/reporting/json.rs
//! JSON rendering for machine consumers.

use crate::error::Result;
use crate::recommend::RefactoringReport;
use crate::vectors::MetricsTable;

/// Serializes the full report, unrelated pairs as `-1.0`.
///
/// # Errors
/// Returns an error when serialization fails.
pub fn render_report(report: &RefactoringReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Serializes a metrics table.
///
/// # Errors
/// Returns an error when serialization fails.
pub fn render_metrics(table: &MetricsTable) -> Result<String> {
    Ok(serde_json::to_string_pretty(table)?)
}
