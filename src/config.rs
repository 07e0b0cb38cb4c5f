use crate::error::{PetLabelsError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_IMAGE_DIR: &str = "pet_images/";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub labels: LabelConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LabelConfig {
    pub image_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub show_statistics: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_file: Option<PathBuf>,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            image_dir: PathBuf::from(DEFAULT_IMAGE_DIR),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            show_statistics: true,
            report_file: None,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(PetLabelsError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| PetLabelsError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| PetLabelsError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        Ok(config)
    }

    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_paths = ["petlabels.toml", ".petlabels.toml"];

                for default_path in &default_paths {
                    if Path::new(default_path).exists() {
                        tracing::debug!(path = *default_path, "using configuration file");
                        return Self::load_from_file(default_path);
                    }
                }

                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(ref image_dir) = cli_args.image_dir {
            self.labels.image_dir = image_dir.clone();
        }

        if let Some(ref report_file) = cli_args.report_file {
            self.output.report_file = Some(report_file.clone());
        }

        if let Some(show_statistics) = cli_args.show_statistics {
            self.output.show_statistics = show_statistics;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.labels.image_dir.as_os_str().is_empty() {
            return Err(PetLabelsError::Config {
                message: "image_dir must not be empty".to_string(),
            });
        }

        if let Some(ref report_file) = self.output.report_file {
            if let Some(parent) = report_file.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(PetLabelsError::Config {
                        message: format!(
                            "Report directory does not exist: {}",
                            parent.display()
                        ),
                    });
                }
            }
        }

        Ok(())
    }

    pub fn create_sample_config() -> String {
        let sample_config = Self::default();
        let body = toml::to_string_pretty(&sample_config).unwrap_or_else(|_| String::new());
        format!(
            "{}\n# Write a JSON report of every extraction:\n# report_file = \"labels.json\"\n",
            body.trim_end()
        )
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub image_dir: Option<PathBuf>,
    pub report_file: Option<PathBuf>,
    pub show_statistics: Option<bool>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image_dir(mut self, image_dir: Option<PathBuf>) -> Self {
        self.image_dir = image_dir;
        self
    }

    pub fn with_report_file(mut self, report_file: Option<PathBuf>) -> Self {
        self.report_file = report_file;
        self
    }

    pub fn with_show_statistics(mut self, show: Option<bool>) -> Self {
        self.show_statistics = show;
        self
    }
}
