use hsqldb_start::cli::Cli;
use hsqldb_start::error::AppError;
use hsqldb_start::task::{TaskOutput, render, resolve_log_dir, resolve_project_root, run};

use launcher_core::HSQLDB_SERVER_MAIN;
use launcher_core::error::CoreError;
use launcher_core::error::settings::SettingsError;
use launcher_core::launch::LaunchMode;
use launcher_core::settings::env::{DATA_DIR_VAR, DRIVER_CLASSPATH_VAR, NAME_VAR, PORT_VAR, SHOW_UI_VAR};

use models::Platform;

use std::path::PathBuf;
use std::time::Duration;

use serial_test::serial;
use tempfile::TempDir;

const SETTINGS: &str = r#"
[database]
port = 9010
name = "cuba"
driver_classpath = "lib/hsqldb.jar"
"#;

/// `run` layers `HSQLDB_*` variables over the file; tests that call it start from a clean slate.
fn clear_hsqldb_env() {
    for var in [PORT_VAR, NAME_VAR, DRIVER_CLASSPATH_VAR, DATA_DIR_VAR, SHOW_UI_VAR] {
        // SAFETY: every test that calls `run` is serialised.
        unsafe { std::env::remove_var(var) };
    }
}

fn project_with_settings(contents: &str) -> TempDir {
    clear_hsqldb_env();
    let root = TempDir::new().unwrap();
    std::fs::write(root.path().join("hsqldb.toml"), contents).unwrap();
    root
}

/// **VALUE**: Verifies the dry run end to end: settings file, flags, mode and command line.
///
/// **WHY THIS MATTERS**: `--dry-run` is how users check what the task will execute. It must
/// reflect the real plan and must not create the data directory or start anything.
#[tokio::test]
#[serial]
async fn given_settings_file_when_dry_run_headless_then_plans_without_side_effects() {
    // GIVEN: A project with a settings file, run headless in dry-run mode
    let root = project_with_settings(SETTINGS);
    let cli = Cli {
        headless: true,
        dry_run: true,
        ..Default::default()
    };

    // WHEN: Running
    let output = run(&cli, root.path()).await.unwrap();

    // THEN: Headless plan in <root>/deploy/hsqldb, nothing created
    let plan = match output {
        TaskOutput::Planned(plan) => plan,
        other => panic!("Expected a plan, got {other:?}"),
    };
    let data_dir = root.path().join("deploy").join("hsqldb");
    assert_eq!(plan.mode, LaunchMode::Headless);
    assert_eq!(plan.working_directory, data_dir);
    assert!(plan.command.iter().any(|arg| arg == HSQLDB_SERVER_MAIN));
    assert!(plan.command.iter().any(|arg| arg == "9010"));
    assert!(!data_dir.exists(), "Dry run must not create the data directory");
}

/// **VALUE**: Verifies that flags win over the settings file.
///
/// **BUG THIS CATCHES**: Would catch flags being applied before the file is loaded.
#[tokio::test]
#[serial]
async fn given_port_flag_when_dry_run_then_flag_overrides_file() {
    // GIVEN: File port 9010, flag port 9555
    let root = project_with_settings(SETTINGS);
    let cli = Cli {
        port: Some(9555),
        headless: true,
        dry_run: true,
        ..Default::default()
    };

    // WHEN: Running
    let output = run(&cli, root.path()).await.unwrap();

    // THEN: Flag value in the command line
    match output {
        TaskOutput::Planned(plan) => {
            assert!(plan.command.iter().any(|arg| arg == "9555"));
            assert!(!plan.command.iter().any(|arg| arg == "9010"));
            assert_eq!(plan.platform, Platform::current());
        }
        other => panic!("Expected a plan, got {other:?}"),
    }
}

/// **VALUE**: Verifies that a missing required value fails the task with a settings error.
///
/// **WHY THIS MATTERS**: Without a port the task cannot start or probe anything. It has to
/// stop before spawning.
#[tokio::test]
#[serial]
async fn given_no_port_anywhere_when_run_then_returns_settings_error() {
    // GIVEN: Settings without a port
    let root = project_with_settings("[database]\nname = \"cuba\"\ndriver_classpath = \"x.jar\"\n");
    let cli = Cli {
        headless: true,
        dry_run: true,
        ..Default::default()
    };

    // WHEN: Running
    let result = run(&cli, root.path()).await;

    // THEN: Settings validation error
    assert!(matches!(
        result,
        Err(AppError::Core(CoreError::Settings(
            SettingsError::ValidationError { .. }
        )))
    ));
}

#[tokio::test]
#[serial]
async fn given_plan_when_rendered_then_produces_json_with_command() {
    let root = project_with_settings(SETTINGS);
    let cli = Cli {
        headless: true,
        dry_run: true,
        ..Default::default()
    };
    let output = run(&cli, root.path()).await.unwrap();

    let json = render(&output).unwrap();

    assert!(json.contains("\"mode\": \"Headless\""), "{json}");
    assert!(json.contains(HSQLDB_SERVER_MAIN));
}

#[test]
fn given_no_overrides_when_resolving_paths_then_uses_defaults() {
    let cli = Cli {
        project_root: Some(PathBuf::from("/work/app")),
        ..Default::default()
    };

    let root = resolve_project_root(&cli).unwrap();
    let log_dir = resolve_log_dir(&cli, &root);

    assert_eq!(root, PathBuf::from("/work/app"));
    assert_eq!(log_dir, root.join("build").join("logs"));
}

/// **VALUE**: Verifies that validation runs after every layer, so a flag can repair a file value.
///
/// **WHY THIS MATTERS**: A shared settings file with a long poll interval must still be
/// usable by a developer who raises `--max-wait` locally.
///
/// **BUG THIS CATCHES**: Would catch the settings file being validated on load, before the
/// environment and flags are applied.
#[tokio::test]
#[serial]
async fn given_invalid_file_interval_when_max_wait_flag_fixes_it_then_plans() {
    // GIVEN: poll_interval 20s against the default 10s max_wait, repaired by --max-wait 30s
    let root = project_with_settings(&format!("{SETTINGS}\n[readiness]\npoll_interval = \"20s\"\n"));
    let cli = Cli {
        max_wait: Some(Duration::from_secs(30)),
        headless: true,
        dry_run: true,
        ..Default::default()
    };

    // WHEN: Running
    let result = run(&cli, root.path()).await;

    // THEN: The combined settings are valid
    assert!(
        matches!(result, Ok(TaskOutput::Planned(_))),
        "Expected a plan, got {result:?}"
    );
}

#[tokio::test]
#[serial]
async fn given_invalid_file_interval_without_flag_when_run_then_returns_validation_error() {
    let root = project_with_settings(&format!("{SETTINGS}\n[readiness]\npoll_interval = \"20s\"\n"));
    let cli = Cli {
        headless: true,
        dry_run: true,
        ..Default::default()
    };

    let result = run(&cli, root.path()).await;

    assert!(matches!(
        result,
        Err(AppError::Core(CoreError::Settings(
            SettingsError::ValidationError { .. }
        )))
    ));
}

/// **VALUE**: Verifies that a relative `--data-dir` lands under the project root.
///
/// **WHY THIS MATTERS**: The flag and the settings file share one rule, so a value moved
/// between them keeps pointing at the same directory.
#[tokio::test]
#[serial]
async fn given_relative_data_dir_flag_when_dry_run_then_resolves_against_project_root() {
    // GIVEN: A relative data directory flag
    let root = project_with_settings(SETTINGS);
    let cli = Cli {
        data_dir: Some(PathBuf::from("var/db")),
        headless: true,
        dry_run: true,
        ..Default::default()
    };

    // WHEN: Running
    let output = run(&cli, root.path()).await.unwrap();

    // THEN: <root>/var/db
    match output {
        TaskOutput::Planned(plan) => {
            assert_eq!(plan.working_directory, root.path().join("var/db"));
        }
        other => panic!("Expected a plan, got {other:?}"),
    }
}
