use crate::error::launch::LaunchError;
use crate::launch::LaunchPlan;
use crate::launch::command::{format_command_line, to_std_command};

use common::ErrorLocation;

use std::io::Error as IoError;
use std::io::ErrorKind;
use std::panic::Location;
use std::path::Path;

use log::{debug, info};
use tokio::process::Command as TokioCommand;

const JAVA_HOME_BIN: &str = "bin";

/// Start the planned command and let it run on its own.
///
/// When the runtime is not on `PATH` and the command invokes it directly, the
/// binary under `java_home` is tried once. Must be called inside a tokio runtime.
///
/// Returns the PID of the spawned process when the OS reports one.
#[track_caller]
pub fn spawn_detached(plan: &LaunchPlan, java_home: Option<&Path>) -> Result<Option<u32>, LaunchError> {
    debug!(
        "Spawning {:?} server in {}",
        plan.mode,
        plan.working_directory.display()
    );

    match spawn_argv(&plan.command, plan) {
        Ok(pid) => Ok(pid),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            let fallback = java_home.filter(|_| plan.invokes_runtime_directly());

            if let Some(home) = fallback {
                let mut argv = plan.command.clone();
                argv[0] = home
                    .join(JAVA_HOME_BIN)
                    .join(plan.platform.java_binary())
                    .display()
                    .to_string();

                debug!("{} not in PATH, trying {}", plan.command[0], argv[0]);

                return spawn_argv(&argv, plan).map_err(|e| LaunchError::Spawn {
                    message: format!("Unable to start HSQL server with {}: {e}", argv[0]),
                    location: ErrorLocation::from(Location::caller()),
                    source: Box::new(e),
                });
            }

            Err(LaunchError::Spawn {
                message: format!("Unable to start HSQL server: {err}"),
                location: ErrorLocation::from(Location::caller()),
                source: Box::new(err),
            })
        }
        Err(err) => Err(LaunchError::Spawn {
            message: format!("Unable to start HSQL server: {err}"),
            location: ErrorLocation::from(Location::caller()),
            source: Box::new(err),
        }),
    }
}

fn spawn_argv(argv: &[String], plan: &LaunchPlan) -> Result<Option<u32>, IoError> {
    let std_cmd = to_std_command(argv, &plan.working_directory, plan.is_verbatim())
        .ok_or_else(|| IoError::new(ErrorKind::InvalidInput, "empty command line"))?;

    let child = TokioCommand::from(std_cmd).spawn()?;
    let pid = child.id();

    info!(
        "Spawned HSQL process (PID: {pid:?}): {}",
        format_command_line(argv)
    );

    // Dropping the handle neither kills nor waits on the child.
    drop(child);

    Ok(pid)
}
