//! Core aggregation engine for sale records

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::aggregate::config::PipelineConfig;
use crate::error::{AggregateError, AggregateResult};

/// Aggregate result across all processed sale records
#[derive(Debug, Clone, PartialEq)]
pub struct SalesSummary {
    /// Arithmetic sum of the configured field across all records
    pub total: f64,
    /// Number of records processed
    pub count: usize,
}

impl SalesSummary {
    /// Summary of a run that processed no records
    pub fn empty() -> Self {
        Self {
            total: 0.0,
            count: 0,
        }
    }
}

/// Read one sale record and extract its numeric total field.
///
/// Fails if the file is unreadable, is not valid JSON, or does not carry a
/// numeric value under `field`.
pub fn read_sale_total(path: &Path, field: &str) -> AggregateResult<f64> {
    let content = std::fs::read_to_string(path).map_err(|e| AggregateError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    let record: Value = serde_json::from_str(&content).map_err(|e| AggregateError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;

    let total = record
        .get(field)
        .ok_or_else(|| AggregateError::MissingField {
            field: field.to_string(),
            path: path.to_path_buf(),
        })?;

    total.as_f64().ok_or_else(|| AggregateError::NotNumeric {
        field: field.to_string(),
        path: path.to_path_buf(),
    })
}

/// Sum the configured field across all given sale files.
///
/// The whole aggregation fails on the first bad file; there is no partial
/// result.
pub fn sum_sales(files: &[PathBuf], config: &PipelineConfig) -> AggregateResult<SalesSummary> {
    let mut total = 0.0;

    for file in files {
        total += read_sale_total(file, &config.total_field)?;
    }

    Ok(SalesSummary {
        total,
        count: files.len(),
    })
}
