//! Report construction and emission
//!
//! The report is rebuilt from scratch on every run. Directory creation and
//! stale-report removal are explicit idempotent operations that report
//! whether they had anything to do.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::aggregate::SalesSummary;
use crate::error::{EmitError, EmitResult};

/// Aggregate report summarizing all discovered sale records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesReport {
    #[serde(rename = "salesTotal")]
    pub sales_total: Number,
    #[serde(rename = "totalStores")]
    pub total_stores: u64,
}

impl SalesReport {
    /// Build a report from an aggregation summary.
    ///
    /// An integral total serializes as an integer token, a fractional one as
    /// a float.
    pub fn from_summary(summary: &SalesSummary) -> EmitResult<Self> {
        Ok(Self {
            sales_total: json_number(summary.total)?,
            total_stores: summary.count as u64,
        })
    }
}

/// Outcome of ensuring the output directory exists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirOutcome {
    Created,
    AlreadyPresent,
}

/// Outcome of removing a previous report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupOutcome {
    Removed,
    NotPresent,
}

/// Create the output directory if it is not already there.
/// "Already exists" is success, not an error.
pub fn ensure_output_dir(dir: &Path) -> EmitResult<DirOutcome> {
    if dir.is_dir() {
        return Ok(DirOutcome::AlreadyPresent);
    }

    match std::fs::create_dir_all(dir) {
        Ok(()) => Ok(DirOutcome::Created),
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(DirOutcome::AlreadyPresent),
        Err(e) => Err(EmitError::CreateDir {
            path: dir.to_path_buf(),
            source: e,
        }),
    }
}

/// Remove a previous report file if one exists.
/// "Does not exist" is success, not an error.
pub fn remove_stale_report(path: &Path) -> EmitResult<CleanupOutcome> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(CleanupOutcome::Removed),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(CleanupOutcome::NotPresent),
        Err(e) => Err(EmitError::RemoveStale {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Render the report as pretty-printed JSON with 2-space indentation
pub fn render_report(report: &SalesReport) -> EmitResult<String> {
    serde_json::to_string_pretty(report).map_err(|e| EmitError::Render {
        message: e.to_string(),
    })
}

/// Write the report, fully replacing any previous content
pub fn write_report(path: &Path, report: &SalesReport) -> EmitResult<()> {
    let content = render_report(report)?;
    std::fs::write(path, content).map_err(|e| EmitError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Full path of the report file inside the output directory
pub fn report_path(output_dir: &Path, file_name: &str) -> PathBuf {
    output_dir.join(file_name)
}

/// Convert a sum into a JSON number, preferring the integer form
fn json_number(total: f64) -> EmitResult<Number> {
    if total.is_finite() && total.fract() == 0.0 && total.abs() <= i64::MAX as f64 {
        return Ok(Number::from(total as i64));
    }

    Number::from_f64(total).ok_or_else(|| EmitError::Render {
        message: format!("sales total is not a finite number: {}", total),
    })
}
