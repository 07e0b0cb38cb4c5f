pub mod cli;
pub mod config;
pub mod error;
pub mod labels;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::{CliOverrides, Config, LabelConfig, OutputConfig};
pub use error::{PetLabelsError, Result, UserFriendlyError};

// Core functionality re-exports
pub use labels::{
    build_label_map, derive_label, extract_from_directory, extract_labels, is_hidden,
    LabelExtraction, LabelMap, LabelReport, LabelStatistics,
};
pub use ui::{OutputFormatter, OutputMode};

use std::path::Path;

/// Main library interface for PetLabels functionality
pub struct PetLabels {
    config: Config,
    output_formatter: OutputFormatter,
}

impl PetLabels {
    pub fn new(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        Self {
            config,
            output_formatter: OutputFormatter::new(output_mode, verbose, quiet),
        }
    }

    /// Create a PetLabels instance from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;

        Ok(Self::new(
            config,
            cli_args.output_format.into(),
            cli_args.verbose,
            cli_args.quiet,
        ))
    }

    /// Extract labels from the configured image directory.
    ///
    /// Writes the JSON report when `output.report_file` is set.
    pub fn extract(&self) -> Result<LabelReport> {
        let image_dir = &self.config.labels.image_dir;
        tracing::info!(directory = %image_dir.display(), "extracting pet labels");

        let extraction = extract_from_directory(image_dir)?;
        if !extraction.duplicates.is_empty() {
            self.output_formatter.warning(&format!(
                "{} duplicate filename(s) ignored",
                extraction.duplicates.len()
            ));
        }

        let report = LabelReport::new(image_dir.clone(), extraction);

        if let Some(ref report_file) = self.config.output.report_file {
            report.write_json(report_file)?;
            self.output_formatter
                .info(&format!("Report written to {}", report_file.display()));
        }

        Ok(report)
    }

    /// Generate sample configuration file
    pub fn generate_sample_config<P: AsRef<Path>>(output_path: P) -> Result<()> {
        let output_path = output_path.as_ref();
        let sample_config = Config::create_sample_config();
        std::fs::write(output_path, sample_config).map_err(|e| PetLabelsError::Config {
            message: format!("Failed to write config file {}: {}", output_path.display(), e),
        })?;
        Ok(())
    }

    /// Print the report in the configured output mode
    pub fn print_report(&self, report: &LabelReport) {
        self.output_formatter
            .print_label_report(report, self.config.output.show_statistics);
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &PetLabelsError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}

/// Get version information
pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
