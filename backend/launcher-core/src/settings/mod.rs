pub mod env;

mod duration;

use crate::error::settings::SettingsError;

use common::ErrorLocation;
use models::readiness_check::{DEFAULT_MAX_WAIT, DEFAULT_POLL_INTERVAL, DEFAULT_READINESS_HOST};
use models::{LaunchConfig, LaunchConfigBuilder, ReadinessCheck};

use std::panic::Location;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::info;
use serde::{Deserialize, Serialize};

// ============================================
// SETTINGS STRUCTS
// ============================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseSettings {
    pub port: Option<u16>,
    pub name: Option<String>,
    /// Relative paths resolve against the project root.
    pub data_dir: Option<PathBuf>,
    pub driver_classpath: Option<String>,
    #[serde(default = "default_show_ui")]
    pub show_ui: bool,
    #[serde(default)]
    pub ui_classpath: Vec<String>,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            port: None,
            name: None,
            data_dir: None,
            driver_classpath: None,
            show_ui: default_show_ui(),
            ui_classpath: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_max_wait", with = "duration")]
    pub max_wait: Duration,
    #[serde(default = "default_poll_interval", with = "duration")]
    pub poll_interval: Duration,
    /// Fail the task when the server never accepts a connection.
    #[serde(default)]
    pub strict: bool,
}

impl Default for ReadinessSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            max_wait: default_max_wait(),
            poll_interval: default_poll_interval(),
            strict: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub database: DatabaseSettings,

    #[serde(default)]
    pub readiness: ReadinessSettings,
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_show_ui() -> bool {
    true
}
fn default_host() -> String {
    DEFAULT_READINESS_HOST.to_string()
}
fn default_max_wait() -> Duration {
    DEFAULT_MAX_WAIT
}
fn default_poll_interval() -> Duration {
    DEFAULT_POLL_INTERVAL
}

// ============================================
// IMPLEMENTATION
// ============================================

impl Settings {
    /// Load settings from a TOML file.
    ///
    /// A missing file yields defaults; an unreadable or malformed one is an error.
    /// Values are not validated here: environment and flags may still override them,
    /// so call [`Settings::validate`] once all layers are applied.
    #[track_caller]
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            info!("Settings file not found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| SettingsError::ReadError {
            location: ErrorLocation::from(Location::caller()),
            path: path.to_path_buf(),
            source: e,
        })?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| SettingsError::ParseError {
            location: ErrorLocation::from(Location::caller()),
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        info!("Settings loaded from {}", path.display());
        Ok(settings)
    }

    /// Validate values that the launch config builder does not cover.
    #[track_caller]
    pub fn validate(&self) -> Result<(), SettingsError> {
        let readiness = &self.readiness;

        if readiness.host.trim().is_empty() {
            return Err(SettingsError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: String::from("Readiness host cannot be empty"),
            });
        }

        if readiness.poll_interval.is_zero() {
            return Err(SettingsError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: String::from("Poll interval must be greater than zero"),
            });
        }

        if readiness.poll_interval > readiness.max_wait {
            return Err(SettingsError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Poll interval {:?} exceeds max wait {:?}",
                    readiness.poll_interval, readiness.max_wait
                ),
            });
        }

        Ok(())
    }

    /// Build the launch config, resolving the data directory against `project_root`.
    #[track_caller]
    pub fn to_launch_config(&self, project_root: &Path) -> Result<LaunchConfig, SettingsError> {
        let db = &self.database;

        let mut builder = LaunchConfigBuilder::default()
            .with_project_root(project_root)
            .with_show_ui(db.show_ui);

        if let Some(port) = db.port {
            builder = builder.with_port(port);
        }
        if let Some(ref name) = db.name {
            builder = builder.with_database_name(name);
        }
        if let Some(ref classpath) = db.driver_classpath {
            builder = builder.with_driver_classpath(classpath);
        }
        if let Some(ref dir) = db.data_dir {
            builder = builder.with_working_directory(dir);
        }

        Ok(builder.build()?)
    }

    pub fn to_readiness_check(&self, port: u16) -> ReadinessCheck {
        ReadinessCheck::for_port(port)
            .with_host(&self.readiness.host)
            .with_max_wait(self.readiness.max_wait)
            .with_poll_interval(self.readiness.poll_interval)
    }
}
