use crate::config::{CliOverrides, Config};
use crate::error::Result;
use crate::ui::OutputMode;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "petlabels")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Derive pet labels from image filenames")]
#[command(
    long_about = "PetLabels reads a directory of pet images and derives the ground-truth \
                  label of each image from its filename (Boston_terrier_02259.jpg -> boston terrier)."
)]
#[command(after_help = "EXAMPLES:\n  \
    petlabels pet_images/\n  \
    petlabels uploaded_images --output-format json\n  \
    petlabels pet_images/ --report labels.json --no-stats\n  \
    petlabels --generate-config")]
pub struct Cli {
    /// Directory of pet images (defaults to the configured image_dir)
    pub image_dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Write a JSON report to this file
    #[arg(long, help = "Write the labels and statistics as JSON to this file")]
    pub report: Option<PathBuf>,

    /// Hide the label statistics
    #[arg(long, help = "Do not print label statistics")]
    pub no_stats: bool,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Generate sample configuration file
    #[arg(long, help = "Generate a sample configuration file")]
    pub generate_config: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Tab-separated plain text output
    Plain,
}

impl From<OutputFormat> for OutputMode {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Human => OutputMode::Human,
            OutputFormat::Json => OutputMode::Json,
            OutputFormat::Plain => OutputMode::Plain,
        }
    }
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref())?;

        let overrides = self.create_cli_overrides();
        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        CliOverrides::new()
            .with_image_dir(self.image_dir.clone())
            .with_report_file(self.report.clone())
            .with_show_statistics(if self.no_stats { Some(false) } else { None })
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    pub fn log_directive(&self) -> &'static str {
        match self.verbosity_level() {
            _ if self.quiet => "petlabels=error",
            0 => "petlabels=warn",
            1 => "petlabels=info",
            _ => "petlabels=debug",
        }
    }
}
