use common::ErrorLocation;
use launcher_core::error::CoreError;
use launcher_core::error::launch::LaunchError;
use launcher_core::error::settings::SettingsError;

use thiserror::Error;

/// Errors that end the task with a non-zero exit code.
#[derive(Debug, Error)]
pub enum AppError {
    /// Error from this task's own wiring
    #[error("Task Error: {message} {location}")]
    Task {
        message: String,
        location: ErrorLocation,
    },

    /// Logger could not be set up
    #[error("Logger Error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    /// Error from launcher-core operations (settings, spawn, readiness)
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<LaunchError> for AppError {
    fn from(err: LaunchError) -> Self {
        AppError::Core(CoreError::Launch(err))
    }
}

impl From<SettingsError> for AppError {
    fn from(err: SettingsError) -> Self {
        AppError::Core(CoreError::Settings(err))
    }
}
