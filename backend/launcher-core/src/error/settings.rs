use common::ErrorLocation;
use models::ModelError;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Settings Read Error: {path}: {source} {location}")]
    ReadError {
        location: ErrorLocation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Settings Parse Error: {path}: {reason} {location}")]
    ParseError {
        location: ErrorLocation,
        path: PathBuf,
        reason: String,
    },

    #[error("Settings Env File Error: {path}: {reason} {location}")]
    EnvFileError {
        location: ErrorLocation,
        path: PathBuf,
        reason: String,
    },

    #[error("Settings Validation Error: {reason} {location}")]
    ValidationError {
        location: ErrorLocation,
        reason: String,
    },
}

impl From<ModelError> for SettingsError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::Validation { message, location } => SettingsError::ValidationError {
                location,
                reason: message,
            },
        }
    }
}
