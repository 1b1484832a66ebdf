use launcher_core::settings::Settings;
use launcher_core::settings::env::load_env_file;

use serial_test::serial;
use tempfile::TempDir;

const TEST_NAME_VAR: &str = "HSQLDB_NAME";

/// **VALUE**: Verifies that a project `.env` file feeds the `HSQLDB_*` overrides.
///
/// **WHY THIS MATTERS**: Developers keep machine-specific ports in `.env`. If it is not
/// loaded, the server starts on the shared default port and collides with colleagues'.
///
/// Serial because dotenvy writes the process environment.
#[test]
#[serial]
fn given_env_file_when_loaded_then_overrides_apply() {
    // GIVEN: A project root with a .env file and no inherited value
    let root = TempDir::new().unwrap();
    std::fs::write(root.path().join(".env"), "HSQLDB_NAME=from_env_file\n").unwrap();
    if std::env::var_os(TEST_NAME_VAR).is_some() {
        // Inherited value would win over the file; nothing to check here.
        return;
    }

    // WHEN: Loading the file and applying overrides
    let loaded = load_env_file(root.path()).unwrap();
    let mut settings = Settings::default();
    settings.apply_env().unwrap();

    // THEN: The file value reached the settings
    assert_eq!(loaded, Some(root.path().join(".env")));
    assert_eq!(settings.database.name.as_deref(), Some("from_env_file"));

    // Cleanup
    // SAFETY: serialised with every other test that touches the environment.
    unsafe { std::env::remove_var(TEST_NAME_VAR) };
}

#[test]
#[serial]
fn given_no_env_file_when_loaded_then_returns_none() {
    let root = TempDir::new().unwrap();

    assert_eq!(load_env_file(root.path()).unwrap(), None);
}
