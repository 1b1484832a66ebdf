pub mod builder;

use serde::Serialize;

use std::path::{Path, PathBuf};

/// Path segments of the data directory under the project root when none is configured.
pub const DEFAULT_DATA_DIR_SEGMENTS: [&str; 2] = ["deploy", "hsqldb"];

/// Settings for a single database server launch.
///
/// Constructed through [`builder::LaunchConfigBuilder`], which guarantees every field
/// is present and `working_directory` is absolute whenever a project root was supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchConfig {
    pub(crate) port: u16,
    pub(crate) working_directory: PathBuf,
    pub(crate) database_name: String,
    pub(crate) driver_classpath: String,
    pub(crate) show_ui: bool,
}

impl LaunchConfig {
    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn working_directory(&self) -> &Path {
        &self.working_directory
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    pub fn driver_classpath(&self) -> &str {
        &self.driver_classpath
    }

    pub fn show_ui(&self) -> bool {
        self.show_ui
    }

    /// `<project_root>/deploy/hsqldb`
    pub fn default_working_directory(project_root: &Path) -> PathBuf {
        DEFAULT_DATA_DIR_SEGMENTS
            .iter()
            .fold(project_root.to_path_buf(), |dir, segment| dir.join(segment))
    }
}
