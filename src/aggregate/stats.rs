//! Statistics for pipeline runs

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Statistics for one completed pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunStats {
    /// Number of sales files discovered under the root
    pub files_discovered: usize,
    /// Number of sales files aggregated into the report
    pub files_aggregated: usize,
    /// Total sales across all aggregated files
    pub sales_total: f64,
    /// Processing time in milliseconds
    pub elapsed_ms: u64,
    /// Timestamp of when the run finished
    pub collected_at: chrono::DateTime<chrono::Utc>,
}

impl RunStats {
    /// Create statistics for a completed run
    pub fn for_run(
        files_discovered: usize,
        files_aggregated: usize,
        sales_total: f64,
        elapsed: Duration,
    ) -> Self {
        Self {
            files_discovered,
            files_aggregated,
            sales_total,
            elapsed_ms: elapsed.as_millis() as u64,
            collected_at: chrono::Utc::now(),
        }
    }

    /// Get a formatted summary line
    pub fn summary(&self) -> String {
        format!(
            "Aggregated {} stores in {:.1}s - sales total {}",
            self.files_aggregated,
            self.elapsed_ms as f32 / 1000.0,
            self.sales_total
        )
    }

    /// Export to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
