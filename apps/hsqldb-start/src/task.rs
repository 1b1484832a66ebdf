//! The start-database task: settings in, running server out.

use crate::cli::Cli;
use crate::error::AppError;

use common::ErrorLocation;
use launcher_core::SETTINGS_FILE_NAME;
use launcher_core::environment::Environment;
use launcher_core::launch::{LaunchOutcome, LaunchPlan, plan, start};
use launcher_core::readiness::{Readiness, ensure_ready};
use launcher_core::settings::Settings;
use launcher_core::settings::env::load_env_file;

use std::env::current_dir;
use std::panic::Location;
use std::path::{Path, PathBuf};

use log::{debug, info};

const DEFAULT_LOG_DIR: [&str; 2] = ["build", "logs"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutput {
    /// `--dry-run`: what would have been started.
    Planned(LaunchPlan),
    Started(LaunchOutcome),
}

/// `--project-root`, or the current directory.
#[track_caller]
pub fn resolve_project_root(cli: &Cli) -> Result<PathBuf, AppError> {
    match cli.project_root {
        Some(ref root) => Ok(root.clone()),
        None => current_dir().map_err(|e| AppError::Task {
            message: format!("Failed to determine current directory: {e}"),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

/// `--log-dir`, or `<project_root>/build/logs`.
pub fn resolve_log_dir(cli: &Cli, project_root: &Path) -> PathBuf {
    cli.log_dir.clone().unwrap_or_else(|| {
        DEFAULT_LOG_DIR
            .iter()
            .fold(project_root.to_path_buf(), |dir, segment| dir.join(segment))
    })
}

/// Settings file, then `.env` and `HSQLDB_*` variables, then flags.
pub fn resolve_settings(cli: &Cli, project_root: &Path) -> Result<Settings, AppError> {
    load_env_file(project_root)?;

    let settings_path = cli
        .settings
        .clone()
        .unwrap_or_else(|| project_root.join(SETTINGS_FILE_NAME));

    let mut settings = Settings::load(&settings_path)?;
    settings.apply_env()?;
    cli.apply_to(&mut settings);
    settings.validate()?;

    debug!("Resolved settings: {settings:?}");
    Ok(settings)
}

/// Run the task: start the server (or only plan it) and wait for readiness.
pub async fn run(cli: &Cli, project_root: &Path) -> Result<TaskOutput, AppError> {
    let settings = resolve_settings(cli, project_root)?;
    let config = settings.to_launch_config(project_root)?;
    let env = Environment::detect(settings.database.ui_classpath.clone());
    let check = settings.to_readiness_check(config.port());

    if cli.dry_run {
        let plan = plan(&config, &env)?;
        info!("Dry run, would start: {}", plan.command_line());
        return Ok(TaskOutput::Planned(plan));
    }

    let outcome = start(&config, &env, &check).await?;
    ensure_ready(&outcome.readiness, &check, settings.readiness.strict)?;

    match outcome.readiness {
        Readiness::Ready { elapsed, .. } => {
            info!(
                "HSQL server '{}' is up on port {} ({elapsed:?})",
                config.database_name(),
                config.port()
            );
        }
        Readiness::TimedOut { .. } => {
            info!(
                "Continuing although HSQL server on port {} is not reachable yet",
                config.port()
            );
        }
    }

    Ok(TaskOutput::Started(outcome))
}

/// JSON rendering of the task output for stdout.
#[track_caller]
pub fn render(output: &TaskOutput) -> Result<String, AppError> {
    let rendered = match output {
        TaskOutput::Planned(plan) => serde_json::to_string_pretty(plan),
        TaskOutput::Started(outcome) => serde_json::to_string_pretty(outcome),
    };

    rendered.map_err(|e| AppError::Task {
        message: format!("Failed to render task output: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })
}
