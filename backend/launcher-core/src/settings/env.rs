//! Environment variable overrides for [`Settings`].

use crate::ENV_FILE_NAME;
use crate::error::settings::SettingsError;
use crate::settings::Settings;

use common::ErrorLocation;

use std::panic::Location;
use std::path::{Path, PathBuf};

use log::{debug, info};

pub const PORT_VAR: &str = "HSQLDB_PORT";
pub const NAME_VAR: &str = "HSQLDB_NAME";
pub const DRIVER_CLASSPATH_VAR: &str = "HSQLDB_DRIVER_CLASSPATH";
pub const DATA_DIR_VAR: &str = "HSQLDB_DATA_DIR";
pub const SHOW_UI_VAR: &str = "HSQLDB_SHOW_UI";

/// Load `<project_root>/.env` into the process environment.
///
/// Variables already set in the environment keep their values. Returns the
/// loaded path, or `None` when the project has no `.env` file.
#[track_caller]
pub fn load_env_file(project_root: &Path) -> Result<Option<PathBuf>, SettingsError> {
    let env_path = project_root.join(ENV_FILE_NAME);

    if !env_path.is_file() {
        debug!("No {ENV_FILE_NAME} file at {}", env_path.display());
        return Ok(None);
    }

    dotenvy::from_path(&env_path).map_err(|e| SettingsError::EnvFileError {
        location: ErrorLocation::from(Location::caller()),
        path: env_path.clone(),
        reason: e.to_string(),
    })?;

    info!("Loaded environment from {}", env_path.display());
    Ok(Some(env_path))
}

impl Settings {
    /// Apply `HSQLDB_*` overrides from the process environment.
    #[track_caller]
    pub fn apply_env(&mut self) -> Result<(), SettingsError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `HSQLDB_*` overrides returned by `lookup`.
    #[track_caller]
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db = &mut self.database;

        if let Some(raw) = lookup(PORT_VAR) {
            let port = raw.trim().parse::<u16>().map_err(|e| SettingsError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("{PORT_VAR}='{raw}' is not a valid port: {e}"),
            })?;
            debug!("{PORT_VAR} overrides port with {port}");
            db.port = Some(port);
        }

        if let Some(name) = lookup(NAME_VAR) {
            debug!("{NAME_VAR} overrides database name");
            db.name = Some(name);
        }

        if let Some(classpath) = lookup(DRIVER_CLASSPATH_VAR) {
            debug!("{DRIVER_CLASSPATH_VAR} overrides driver classpath");
            db.driver_classpath = Some(classpath);
        }

        if let Some(dir) = lookup(DATA_DIR_VAR) {
            debug!("{DATA_DIR_VAR} overrides data directory with {dir}");
            db.data_dir = Some(PathBuf::from(dir));
        }

        if let Some(raw) = lookup(SHOW_UI_VAR) {
            db.show_ui = parse_flag(&raw).ok_or_else(|| SettingsError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("{SHOW_UI_VAR}='{raw}' is not a boolean"),
            })?;
        }

        Ok(())
    }
}

pub(crate) fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
