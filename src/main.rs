use std::path::PathBuf;

use anyhow::{Context, Result};

use salestally::pipeline::{self, ReportPaths};
use salestally::{console, PipelineConfig};

/// Directory of sale records, relative to the executable
const SALES_DIR_NAME: &str = "stores";

/// Directory the report is written into, relative to the executable
const OUTPUT_DIR_NAME: &str = "salesTotals";

fn main() -> Result<()> {
    let paths = resolve_install_paths()?;
    let config = PipelineConfig::default();

    match pipeline::run(&paths, &config) {
        Ok(stats) => {
            if !config.quiet {
                println!("{}", stats.summary());
            }
            Ok(())
        }
        Err(e) => {
            console::handle_error(&e);
            std::process::exit(1);
        }
    }
}

/// Resolve the sales and output directories next to the running executable.
/// The program reads and writes the same locations regardless of the
/// working directory it is launched from.
fn resolve_install_paths() -> Result<ReportPaths> {
    let exe = std::env::current_exe().context("failed to locate the running executable")?;
    let install_dir = exe
        .parent()
        .map(PathBuf::from)
        .context("executable has no parent directory")?;

    Ok(ReportPaths::new(
        install_dir.join(SALES_DIR_NAME),
        install_dir.join(OUTPUT_DIR_NAME),
    ))
}
