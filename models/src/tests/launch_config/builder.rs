use crate::{LaunchConfig, LaunchConfigBuilder, ModelError};

use std::path::PathBuf;

fn complete_builder() -> LaunchConfigBuilder {
    LaunchConfigBuilder::default()
        .with_port(9010)
        .with_project_root("/work/app")
        .with_database_name("cuba")
        .with_driver_classpath("/libs/hsqldb.jar")
}

fn validation_message(result: Result<LaunchConfig, ModelError>) -> String {
    match result.unwrap_err() {
        ModelError::Validation { message, .. } => message,
    }
}

/// **VALUE**: Verifies the documented default data directory `<projectRoot>/deploy/hsqldb`.
///
/// **WHY THIS MATTERS**: Build scripts that never set a data directory rely on the database
/// files landing in the same place on every run. A different default silently starts an
/// empty database.
///
/// **BUG THIS CATCHES**: Would catch if the default segments change or the project root is
/// ignored when no working directory is given.
#[test]
fn given_no_working_directory_when_building_then_defaults_under_project_root() {
    // GIVEN: A builder with a project root but no working directory
    let builder = complete_builder();

    // WHEN: Building
    let config = builder.build().unwrap();

    // THEN: Working directory is <root>/deploy/hsqldb
    let expected = PathBuf::from("/work/app").join("deploy").join("hsqldb");
    assert_eq!(config.working_directory(), expected.as_path());
}

/// **VALUE**: Verifies that a relative working directory resolves against the project root.
///
/// **WHY THIS MATTERS**: Settings files carry paths relative to the project. Resolving them
/// against the launcher's current directory would scatter database files.
///
/// **BUG THIS CATCHES**: Would catch if relative paths are passed through unchanged.
#[test]
fn given_relative_working_directory_when_building_then_resolves_against_root() {
    // GIVEN: A relative working directory
    let builder = complete_builder().with_working_directory("data/db");

    // WHEN: Building
    let config = builder.build().unwrap();

    // THEN: Joined onto the project root
    assert_eq!(
        config.working_directory(),
        PathBuf::from("/work/app").join("data/db").as_path()
    );
}

/// **VALUE**: Verifies that an absolute working directory wins over the project root.
///
/// **BUG THIS CATCHES**: Would catch if an explicit directory is overwritten by the default.
#[test]
fn given_absolute_working_directory_when_building_then_kept_verbatim() {
    // GIVEN: An absolute working directory
    let dir = std::env::temp_dir().join("hsqldb-data");
    let builder = complete_builder().with_working_directory(&dir);

    // WHEN: Building
    let config = builder.build().unwrap();

    // THEN: Unchanged
    assert_eq!(config.working_directory(), dir.as_path());
}

/// **VALUE**: Verifies that the UI is requested unless explicitly disabled.
///
/// **BUG THIS CATCHES**: Would catch if the `show_ui` default flips to headless.
#[test]
fn given_show_ui_not_set_when_building_then_defaults_to_true() {
    // GIVEN / WHEN: Building without touching show_ui
    let config = complete_builder().build().unwrap();

    // THEN: UI requested
    assert!(config.show_ui());
    assert!(!complete_builder().with_show_ui(false).build().unwrap().show_ui());
}

/// **VALUE**: Verifies that port zero is rejected.
///
/// **WHY THIS MATTERS**: Port 0 asks the OS for a random port; the readiness probe could never
/// find the server and the build would proceed against nothing.
///
/// **BUG THIS CATCHES**: Would catch if the port check is removed.
#[test]
fn given_zero_port_when_building_then_returns_validation_error() {
    // GIVEN: Port zero
    let builder = complete_builder().with_port(0);

    // WHEN: Building
    let result = builder.build();

    // THEN: Validation error
    assert_eq!(validation_message(result), "Port must be non-zero");
}

/// **VALUE**: Verifies that required fields are enforced.
///
/// **BUG THIS CATCHES**: Would catch if the builder silently fills required values.
#[test]
fn given_missing_required_fields_when_building_then_returns_validation_error() {
    // GIVEN: Builders each missing one required field
    let missing_port = LaunchConfigBuilder::default()
        .with_project_root("/work/app")
        .with_database_name("cuba")
        .with_driver_classpath("/libs/hsqldb.jar");
    let missing_name = LaunchConfigBuilder::default()
        .with_port(9010)
        .with_project_root("/work/app")
        .with_driver_classpath("/libs/hsqldb.jar");
    let missing_classpath = LaunchConfigBuilder::default()
        .with_port(9010)
        .with_project_root("/work/app")
        .with_database_name("cuba");
    let missing_directory = LaunchConfigBuilder::default()
        .with_port(9010)
        .with_database_name("cuba")
        .with_driver_classpath("/libs/hsqldb.jar");

    // WHEN / THEN: Each reports the missing field
    assert_eq!(validation_message(missing_port.build()), "Port is required");
    assert_eq!(
        validation_message(missing_name.build()),
        "Database name is required"
    );
    assert_eq!(
        validation_message(missing_classpath.build()),
        "Driver classpath is required"
    );
    assert_eq!(
        validation_message(missing_directory.build()),
        "Working directory or project root is required"
    );
}

/// **VALUE**: Verifies that blank strings do not satisfy required text fields.
///
/// **BUG THIS CATCHES**: Would catch if `"   "` slipped through as a database name, producing
/// `--dbname.0    ` on the server command line.
#[test]
fn given_blank_name_or_classpath_when_building_then_returns_validation_error() {
    // GIVEN: Blank values
    let blank_name = complete_builder().with_database_name("  ");
    let blank_classpath = complete_builder().with_driver_classpath("");

    // WHEN / THEN
    assert_eq!(
        validation_message(blank_name.build()),
        "Database name cannot be empty"
    );
    assert_eq!(
        validation_message(blank_classpath.build()),
        "Driver classpath cannot be empty"
    );
}
