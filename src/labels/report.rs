use crate::error::{PetLabelsError, Result};
use crate::labels::extractor::{LabelExtraction, LabelMap};
use crate::labels::statistics::LabelStatistics;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelReport {
    pub directory: PathBuf,
    pub generated_at: DateTime<Utc>,
    pub labels: LabelMap,
    pub statistics: LabelStatistics,
}

impl LabelReport {
    pub fn new<P: Into<PathBuf>>(directory: P, extraction: LabelExtraction) -> Self {
        let statistics = LabelStatistics::from_extraction(&extraction);

        Self {
            directory: directory.into(),
            generated_at: Utc::now(),
            labels: extraction.labels,
            statistics,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = self.to_json_pretty()?;

        fs::write(path, content).map_err(|source| PetLabelsError::Report {
            path: path.display().to_string(),
            source,
        })?;
        tracing::info!(path = %path.display(), labels = self.labels.len(), "wrote label report");

        Ok(())
    }

    pub fn read_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| PetLabelsError::Report {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn directory_display(&self) -> String {
        self.directory.display().to_string()
    }
}
