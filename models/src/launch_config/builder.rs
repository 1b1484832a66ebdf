use crate::error::model_error::ModelError;
use crate::{ErrorLocation, LaunchConfig};

use std::panic::Location;
use std::path::PathBuf;

/// Builder for creating validated [`LaunchConfig`] instances.
///
/// The working directory falls back to `<project_root>/deploy/hsqldb` when not set,
/// and a relative working directory is resolved against the project root.
#[derive(Debug, Default)]
pub struct LaunchConfigBuilder {
    port: Option<u16>,
    working_directory: Option<PathBuf>,
    project_root: Option<PathBuf>,
    database_name: Option<String>,
    driver_classpath: Option<String>,
    show_ui: Option<bool>,
}

impl LaunchConfigBuilder {
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_working_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_directory = Some(dir.into());
        self
    }

    pub fn with_project_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.project_root = Some(root.into());
        self
    }

    pub fn with_database_name(mut self, name: impl Into<String>) -> Self {
        self.database_name = Some(name.into());
        self
    }

    pub fn with_driver_classpath(mut self, classpath: impl Into<String>) -> Self {
        self.driver_classpath = Some(classpath.into());
        self
    }

    pub fn with_show_ui(mut self, show_ui: bool) -> Self {
        self.show_ui = Some(show_ui);
        self
    }

    /// Build the LaunchConfig with validation.
    #[track_caller]
    pub fn build(self) -> Result<LaunchConfig, ModelError> {
        let port = self.port.ok_or_else(|| ModelError::Validation {
            message: String::from("Port is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if port == 0 {
            return Err(ModelError::Validation {
                message: String::from("Port must be non-zero"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let database_name = self.database_name.ok_or_else(|| ModelError::Validation {
            message: String::from("Database name is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if database_name.trim().is_empty() {
            return Err(ModelError::Validation {
                message: String::from("Database name cannot be empty"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let driver_classpath = self.driver_classpath.ok_or_else(|| ModelError::Validation {
            message: String::from("Driver classpath is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if driver_classpath.trim().is_empty() {
            return Err(ModelError::Validation {
                message: String::from("Driver classpath cannot be empty"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let working_directory = match (self.working_directory, self.project_root) {
            (Some(dir), Some(root)) if dir.is_relative() => root.join(dir),
            (Some(dir), _) => dir,
            (None, Some(root)) => LaunchConfig::default_working_directory(&root),
            (None, None) => {
                return Err(ModelError::Validation {
                    message: String::from("Working directory or project root is required"),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        Ok(LaunchConfig {
            port,
            working_directory,
            database_name,
            driver_classpath,
            show_ui: self.show_ui.unwrap_or(true),
        })
    }
}
