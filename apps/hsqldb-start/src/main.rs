use hsqldb_start::cli::Cli;
use hsqldb_start::error::AppError;
use hsqldb_start::logger::{DEFAULT_LOG_LEVEL, initialize as LoggerInitialize};
use hsqldb_start::task::{render, resolve_log_dir, resolve_project_root, run};

use common::ErrorLocation;

use std::fs::create_dir_all;
use std::panic::Location;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

fn setup_logging(cli: &Cli, project_root: &Path) -> Result<(), AppError> {
    let log_dir = resolve_log_dir(cli, project_root);

    create_dir_all(&log_dir).map_err(|e| AppError::Logger {
        message: format!("Failed to create log directory {}: {e}", log_dir.display()),
        location: ErrorLocation::from(Location::caller()),
    })?;

    LoggerInitialize(&log_dir, cli.log_level.unwrap_or(DEFAULT_LOG_LEVEL))?;

    info!("Log directory: {}", log_dir.display());
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let project_root = match resolve_project_root(&cli) {
        Ok(root) => root,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = setup_logging(&cli, &project_root) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    info!("hsqldb-start running in {}", project_root.display());

    let result = match run(&cli, &project_root).await {
        Ok(output) => render(&output),
        Err(e) => Err(e),
    };

    match result {
        Ok(rendered) => {
            println!("{rendered}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
