//! Configuration options for the aggregation pipeline

/// Pipeline configuration options
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// File extension identifying sale records (without the leading dot)
    pub sales_extension: String,
    /// Name of the numeric field summed from each sale record
    pub total_field: String,
    /// File name of the emitted report
    pub report_file_name: String,
    /// Suppress non-error console output
    pub quiet: bool,
    /// List each discovered sales file on the console
    pub verbose: bool,
    /// Show a progress bar while aggregating
    pub progress: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            sales_extension: "json".to_string(),
            total_field: "total".to_string(),
            report_file_name: "report.json".to_string(),
            quiet: false,
            verbose: false,
            progress: true,
        }
    }
}

impl PipelineConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sales file extension (a leading dot is stripped)
    pub fn with_sales_extension(mut self, extension: &str) -> Self {
        self.sales_extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// Set the name of the numeric field summed from each record
    pub fn with_total_field(mut self, field: &str) -> Self {
        self.total_field = field.to_string();
        self
    }

    /// Set the file name of the emitted report
    pub fn with_report_file_name(mut self, name: &str) -> Self {
        self.report_file_name = name.to_string();
        self
    }

    /// Suppress non-error console output
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// List each discovered sales file
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Enable/disable the aggregation progress bar
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.sales_extension.is_empty() {
            return Err("Sales file extension must not be empty".to_string());
        }

        if self.sales_extension.contains('.') || self.sales_extension.contains('/') {
            return Err(format!(
                "Sales file extension must be a bare suffix, got '{}'",
                self.sales_extension
            ));
        }

        if self.total_field.is_empty() {
            return Err("Total field name must not be empty".to_string());
        }

        if self.report_file_name.is_empty() || self.report_file_name.contains('/') {
            return Err(format!(
                "Report file name must be a bare file name, got '{}'",
                self.report_file_name
            ));
        }

        Ok(())
    }
}
