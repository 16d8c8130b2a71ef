//! Sales report aggregator
//!
//! A Rust CLI tool that recursively discovers per-store sales JSON files,
//! sums their totals, and writes an aggregate report.

pub mod aggregate;
pub mod console;
pub mod discovery;
pub mod error;
pub mod pipeline;
pub mod report;

// Re-export commonly used types
pub use aggregate::{PipelineConfig, RunStats, SalesSummary};
pub use error::{AggregateError, DiscoveryError, EmitError, PipelineError, PipelineResult};
pub use pipeline::ReportPaths;
pub use report::SalesReport;

use std::path::Path;

/// Run the pipeline with default configuration
pub fn generate_report(sales_dir: &Path, output_dir: &Path) -> PipelineResult<RunStats> {
    generate_report_with_config(sales_dir, output_dir, &PipelineConfig::default())
}

/// Run the pipeline with custom configuration
pub fn generate_report_with_config(
    sales_dir: &Path,
    output_dir: &Path,
    config: &PipelineConfig,
) -> PipelineResult<RunStats> {
    let paths = ReportPaths::new(sales_dir.to_path_buf(), output_dir.to_path_buf());
    pipeline::run(&paths, config)
}
