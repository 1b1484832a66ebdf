//! Starting the HSQLDB server process.
//!
//! A launch moves through `NotStarted -> ProcessSpawned -> (Ready | TimedOut)`
//! exactly once:
//! - [`launch`] creates the data directory, picks UI or headless mode, builds the
//!   command line and spawns it detached
//! - [`start`] additionally waits for the server port with [`crate::readiness`]
//!
//! The spawned server is not supervised; it outlives the launcher.

pub mod classpath;
pub mod command;
pub mod spawn;

use crate::environment::Environment;
use crate::error::launch::LaunchError;
use crate::launch::classpath::resolve_classpath_urls;
use crate::launch::command::{build_command, format_command_line};
use crate::launch::spawn::spawn_detached;
use crate::readiness::{Readiness, wait_for_ready};

use common::ErrorLocation;
use models::{LaunchConfig, Platform, ReadinessCheck};

use std::fs::create_dir_all;
use std::panic::Location;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LaunchMode {
    /// Server wrapper with a management window.
    Ui,
    /// Plain network server, no window.
    Headless,
}

impl LaunchMode {
    /// The window is only opened when requested and a display exists.
    pub fn resolve(show_ui: bool, headless: bool) -> Self {
        if show_ui && !headless {
            LaunchMode::Ui
        } else {
            LaunchMode::Headless
        }
    }
}

/// Everything needed to spawn the server, computed without side effects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchPlan {
    pub mode: LaunchMode,
    pub platform: Platform,
    pub command: Vec<String>,
    pub working_directory: PathBuf,
}

impl LaunchPlan {
    /// Windows headless commands carry their own shell quoting.
    pub(crate) fn is_verbatim(&self) -> bool {
        self.platform == Platform::Windows && self.mode == LaunchMode::Headless
    }

    /// True when the first argument is the runtime itself rather than a shell.
    pub(crate) fn invokes_runtime_directly(&self) -> bool {
        self.command
            .first()
            .is_some_and(|program| program == self.platform.java_binary())
    }

    pub fn command_line(&self) -> String {
        format_command_line(&self.command)
    }
}

/// A server process that has been started and released.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpawnedServer {
    pub mode: LaunchMode,
    pub pid: Option<u32>,
}

/// Result of a complete start: spawn plus readiness wait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchOutcome {
    pub mode: LaunchMode,
    pub pid: Option<u32>,
    pub readiness: Readiness,
}

/// Create `dir` and its parents if missing.
///
/// Returns `true` when the directory had to be created.
#[track_caller]
pub fn ensure_working_directory(dir: &Path) -> Result<bool, LaunchError> {
    if dir.is_dir() {
        return Ok(false);
    }

    create_dir_all(dir).map_err(|e| LaunchError::WorkingDirectory {
        message: format!("Unable to create data directory {}: {e}", dir.display()),
        path: dir.to_path_buf(),
        location: ErrorLocation::from(Location::caller()),
        source: e,
    })?;

    info!("Created data directory {}", dir.display());
    Ok(true)
}

/// Resolve mode and command line for `config` on `env`.
#[track_caller]
pub fn plan(config: &LaunchConfig, env: &Environment) -> Result<LaunchPlan, LaunchError> {
    let mut mode = LaunchMode::resolve(config.show_ui(), env.headless);

    // The UI main class only exists on the UI classpath.
    if mode == LaunchMode::Ui && env.ui_classpath.is_empty() {
        warn!("UI mode requested but no UI classpath entries are configured, starting headless");
        mode = LaunchMode::Headless;
    }

    let ui_paths = match mode {
        LaunchMode::Ui => resolve_classpath_urls(&env.ui_classpath)?,
        LaunchMode::Headless => Vec::new(),
    };

    Ok(LaunchPlan {
        mode,
        platform: env.platform,
        command: build_command(config, env.platform, mode, &ui_paths),
        working_directory: config.working_directory().to_path_buf(),
    })
}

/// Create the data directory and spawn the server without waiting for it.
pub async fn launch(config: &LaunchConfig, env: &Environment) -> Result<SpawnedServer, LaunchError> {
    ensure_working_directory(config.working_directory())?;

    let plan = plan(config, env)?;

    match plan.mode {
        LaunchMode::Ui => info!("Starting HSQL UI"),
        LaunchMode::Headless => info!("Starting HSQL headless"),
    }
    info!("Starting HSQL process: {}", plan.command_line());

    let pid = spawn_detached(&plan, env.java_home.as_deref())?;

    Ok(SpawnedServer {
        mode: plan.mode,
        pid,
    })
}

/// Launch the server, then wait until `check` reports the port open or gives up.
///
/// A timed out wait is returned as [`Readiness::TimedOut`]; use
/// [`crate::readiness::ensure_ready`] to turn it into an error.
pub async fn start(
    config: &LaunchConfig,
    env: &Environment,
    check: &ReadinessCheck,
) -> Result<LaunchOutcome, LaunchError> {
    let spawned = launch(config, env).await?;
    let readiness = wait_for_ready(check).await;

    Ok(LaunchOutcome {
        mode: spawned.mode,
        pid: spawned.pid,
        readiness,
    })
}
