//! End-to-end pipeline: discover, aggregate, emit

use std::path::PathBuf;
use std::time::Instant;

use crate::aggregate::{self, PipelineConfig, RunStats, SalesSummary};
use crate::console;
use crate::discovery;
use crate::error::{PipelineError, PipelineResult};
use crate::report::{self, CleanupOutcome, SalesReport};

/// Filesystem locations for one pipeline run
#[derive(Debug, Clone)]
pub struct ReportPaths {
    /// Root directory scanned for sale records
    pub sales_dir: PathBuf,
    /// Directory the report is written into
    pub output_dir: PathBuf,
}

impl ReportPaths {
    pub fn new(sales_dir: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            sales_dir,
            output_dir,
        }
    }

    /// Full path of the report file for the given config
    pub fn report_file(&self, config: &PipelineConfig) -> PathBuf {
        report::report_path(&self.output_dir, &config.report_file_name)
    }
}

/// Run the full pipeline and return statistics about the run.
///
/// A previous report is only removed once aggregation has succeeded, so a
/// failing run leaves any existing report untouched.
pub fn run(paths: &ReportPaths, config: &PipelineConfig) -> PipelineResult<RunStats> {
    let start = Instant::now();

    config
        .validate()
        .map_err(PipelineError::invalid_config)?;

    let sales_files = discovery::find_sales_files(&paths.sales_dir, &config.sales_extension)?;

    if !config.quiet {
        println!("Found {} sales files", sales_files.len());
    }
    if config.verbose {
        for file in &sales_files {
            println!("  {}", file.display());
        }
    }

    let summary = aggregate_sales(&sales_files, config)?;

    report::ensure_output_dir(&paths.output_dir)?;

    let report_file = paths.report_file(config);
    if report::remove_stale_report(&report_file)? == CleanupOutcome::NotPresent {
        console::show_warning(
            &format!("no previous report to remove at {}", report_file.display()),
            config.quiet,
        );
    }

    let sales_report = SalesReport::from_summary(&summary)?;
    report::write_report(&report_file, &sales_report)?;

    console::show_success(
        &format!("Sales report written to {}", paths.output_dir.display()),
        config.quiet,
    );

    Ok(RunStats::for_run(
        sales_files.len(),
        summary.count,
        summary.total,
        start.elapsed(),
    ))
}

/// Sum sale files, driving a progress bar when enabled and on a terminal
fn aggregate_sales(files: &[PathBuf], config: &PipelineConfig) -> PipelineResult<SalesSummary> {
    let show_progress = config.progress && !config.quiet && console::progress_enabled();
    if !show_progress {
        return Ok(aggregate::sum_sales(files, config)?);
    }

    let pb = console::create_progress_bar(files.len() as u64);
    let mut total = 0.0;

    for file in files {
        match aggregate::read_sale_total(file, &config.total_field) {
            Ok(value) => total += value,
            Err(e) => {
                pb.abandon();
                return Err(e.into());
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(SalesSummary {
        total,
        count: files.len(),
    })
}
