//! Console output helpers

use crate::error::PipelineError;

/// Show a success message (if not in quiet mode)
pub fn show_success(message: &str, quiet: bool) {
    if quiet {
        return;
    }

    if should_use_color() {
        println!("{} {}", console::style("✓").green(), message);
    } else {
        println!("✓ {}", message);
    }
}

/// Show an error message
pub fn show_error(message: &str) {
    if should_use_color() {
        eprintln!("{} {}", console::style("✗").red(), message);
    } else {
        eprintln!("✗ {}", message);
    }
}

/// Show a warning message (if not in quiet mode)
pub fn show_warning(message: &str, quiet: bool) {
    if quiet {
        return;
    }

    if should_use_color() {
        eprintln!("{} {}", console::style("⚠").yellow(), message);
    } else {
        eprintln!("⚠ {}", message);
    }
}

/// Check if output should be colored
pub fn should_use_color() -> bool {
    atty::is(atty::Stream::Stdout) && std::env::var("NO_COLOR").is_err()
}

/// Check if a progress bar should be drawn at all
pub fn progress_enabled() -> bool {
    atty::is(atty::Stream::Stdout)
}

/// Create a progress bar for file processing
pub fn create_progress_bar(total: u64) -> indicatif::ProgressBar {
    let pb = indicatif::ProgressBar::new(total);
    pb.set_style(
        indicatif::ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb
}

/// Handle pipeline errors with user-friendly messages
pub fn handle_error(error: &PipelineError) {
    show_error(&error.user_message());

    if matches!(error, PipelineError::Aggregate(_)) {
        eprintln!("\nNo report was written; fix the offending sales file and rerun.");
    }
}
