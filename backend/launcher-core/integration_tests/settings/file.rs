use launcher_core::error::settings::SettingsError;
use launcher_core::settings::Settings;

use std::path::PathBuf;
use std::time::Duration;

use tempfile::TempDir;

fn write_settings(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hsqldb.toml");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

/// **VALUE**: Verifies that a missing settings file yields defaults instead of an error.
///
/// **WHY THIS MATTERS**: Most projects configure everything on the command line. Requiring a
/// file would break them.
#[test]
fn given_missing_file_when_loaded_then_returns_defaults() {
    // GIVEN: A path with no file
    let dir = TempDir::new().unwrap();

    // WHEN: Loading
    let settings = Settings::load(&dir.path().join("hsqldb.toml")).unwrap();

    // THEN: Defaults
    assert_eq!(settings, Settings::default());
    assert!(settings.database.show_ui);
    assert_eq!(settings.readiness.host, "localhost");
    assert_eq!(settings.readiness.max_wait, Duration::from_secs(10));
    assert_eq!(settings.readiness.poll_interval, Duration::from_secs(1));
    assert!(!settings.readiness.strict);
}

/// **VALUE**: Verifies that every documented key is read, including human-readable durations.
///
/// **BUG THIS CATCHES**: Would catch renamed keys or a duration format that rejects "500ms".
#[test]
fn given_full_file_when_loaded_then_reads_every_field() {
    // GIVEN: A complete settings file
    let (_dir, path) = write_settings(
        r#"
[database]
port = 9010
name = "cuba"
data_dir = "deploy/db"
driver_classpath = "lib/hsqldb.jar"
show_ui = false
ui_classpath = ["file:///opt/ui/launcher.jar"]

[readiness]
host = "127.0.0.1"
max_wait = "30s"
poll_interval = "500ms"
strict = true
"#,
    );

    // WHEN: Loading
    let settings = Settings::load(&path).unwrap();

    // THEN: All values present
    let db = &settings.database;
    assert_eq!(db.port, Some(9010));
    assert_eq!(db.name.as_deref(), Some("cuba"));
    assert_eq!(db.data_dir, Some(PathBuf::from("deploy/db")));
    assert_eq!(db.driver_classpath.as_deref(), Some("lib/hsqldb.jar"));
    assert!(!db.show_ui);
    assert_eq!(db.ui_classpath, vec!["file:///opt/ui/launcher.jar"]);

    let readiness = &settings.readiness;
    assert_eq!(readiness.host, "127.0.0.1");
    assert_eq!(readiness.max_wait, Duration::from_secs(30));
    assert_eq!(readiness.poll_interval, Duration::from_millis(500));
    assert!(readiness.strict);
}

#[test]
fn given_malformed_toml_when_loaded_then_returns_parse_error() {
    let (_dir, path) = write_settings("[database\nport = ");

    let result = Settings::load(&path);

    assert!(matches!(result, Err(SettingsError::ParseError { .. })));
}

#[test]
fn given_unparseable_duration_when_loaded_then_returns_parse_error() {
    let (_dir, path) = write_settings("[readiness]\nmax_wait = \"soon\"\n");

    let result = Settings::load(&path);

    assert!(matches!(result, Err(SettingsError::ParseError { .. })));
}

/// **VALUE**: Verifies that a poll interval longer than the whole wait is rejected.
///
/// **WHY THIS MATTERS**: Such a probe checks exactly once and then sleeps past its own
/// deadline, which is never what the user meant.
#[test]
fn given_poll_interval_above_max_wait_when_validated_then_returns_validation_error() {
    let (_dir, path) = write_settings("[readiness]\nmax_wait = \"1s\"\npoll_interval = \"5s\"\n");

    let settings = Settings::load(&path).unwrap();

    assert!(matches!(
        settings.validate(),
        Err(SettingsError::ValidationError { .. })
    ));
}

#[test]
fn given_zero_poll_interval_when_validated_then_returns_validation_error() {
    let mut settings = Settings::default();
    settings.readiness.poll_interval = Duration::ZERO;

    assert!(matches!(
        settings.validate(),
        Err(SettingsError::ValidationError { .. })
    ));
}

/// **VALUE**: Verifies that settings turn into a launch config rooted at the project.
///
/// **WHY THIS MATTERS**: `data_dir` in the file is relative to the project, not to wherever
/// the task happens to run from.
#[test]
fn given_settings_when_converted_then_builds_launch_config_under_project_root() {
    // GIVEN: Database settings with a relative data dir
    let mut settings = Settings::default();
    settings.database.port = Some(9010);
    settings.database.name = Some(String::from("cuba"));
    settings.database.driver_classpath = Some(String::from("lib/hsqldb.jar"));
    settings.database.data_dir = Some(PathBuf::from("var/db"));
    let root = PathBuf::from("/work/app");

    // WHEN: Converting
    let config = settings.to_launch_config(&root).unwrap();

    // THEN: Resolved against the root
    assert_eq!(config.port(), 9010);
    assert_eq!(config.working_directory(), root.join("var/db").as_path());
    assert!(config.show_ui());
}

#[test]
fn given_settings_without_port_when_converted_then_returns_validation_error() {
    let mut settings = Settings::default();
    settings.database.name = Some(String::from("cuba"));
    settings.database.driver_classpath = Some(String::from("lib/hsqldb.jar"));

    match settings.to_launch_config(&PathBuf::from("/work/app")) {
        Err(SettingsError::ValidationError { reason, .. }) => {
            assert_eq!(reason, "Port is required");
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn given_readiness_settings_when_converted_then_builds_check_for_port() {
    let mut settings = Settings::default();
    settings.readiness.host = String::from("db.local");
    settings.readiness.max_wait = Duration::from_secs(3);

    let check = settings.to_readiness_check(9010);

    assert_eq!(check.address(), "db.local:9010");
    assert_eq!(check.max_wait, Duration::from_secs(3));
    assert_eq!(check.poll_interval, Duration::from_secs(1));
}
