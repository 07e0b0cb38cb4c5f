use std::io::ErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PetLabelsError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Label report {path} could not be accessed: {source}")]
    Report {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization failed: {message}")]
    Serialization { message: String },
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for PetLabelsError {
    fn user_message(&self) -> String {
        match self {
            PetLabelsError::Io(err) => match err.kind() {
                ErrorKind::NotFound => format!("Image directory not found: {}", err),
                ErrorKind::PermissionDenied => {
                    format!("Permission denied reading image directory: {}", err)
                }
                _ => format!("Could not read image directory: {}", err),
            },
            PetLabelsError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            PetLabelsError::Report { path, source } => {
                format!("Could not access label report {}: {}", path, source)
            }
            PetLabelsError::Serialization { message } => {
                format!("Could not serialize labels: {}", message)
            }
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            PetLabelsError::Io(err) => match err.kind() {
                ErrorKind::NotFound => Some(
                    "Check the image directory path, or pass one explicitly (e.g., petlabels pet_images/).".to_string()
                ),
                ErrorKind::PermissionDenied => Some(
                    "Ensure you have read permission on the image directory.".to_string()
                ),
                _ => Some(
                    "Make sure the path points to a directory, not a file.".to_string()
                ),
            },
            PetLabelsError::Config { .. } => Some(
                "Check your configuration file syntax, or regenerate one with --generate-config.".to_string()
            ),
            PetLabelsError::Report { .. } => Some(
                "Choose a writable file path for the report (e.g., --report labels.json).".to_string()
            ),
            PetLabelsError::Serialization { .. } => None,
        }
    }
}

impl From<toml::de::Error> for PetLabelsError {
    fn from(error: toml::de::Error) -> Self {
        PetLabelsError::Config {
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for PetLabelsError {
    fn from(error: serde_json::Error) -> Self {
        PetLabelsError::Serialization {
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PetLabelsError>;
