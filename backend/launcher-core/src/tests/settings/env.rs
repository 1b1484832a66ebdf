// Unit tests for environment overrides
// Lookups are injected so the process environment is never touched

use crate::error::settings::SettingsError;
use crate::settings::Settings;
use crate::settings::env::{
    DATA_DIR_VAR, DRIVER_CLASSPATH_VAR, NAME_VAR, PORT_VAR, SHOW_UI_VAR, parse_flag,
};

use std::collections::HashMap;
use std::path::PathBuf;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

/// **VALUE**: Verifies that every `HSQLDB_*` variable overrides its settings field.
///
/// **WHY THIS MATTERS**: CI pipelines configure the database through the environment. A
/// variable that is silently ignored starts the server with file defaults.
#[test]
fn given_all_variables_when_applied_then_overrides_database_settings() {
    // GIVEN: Settings and a full set of overrides
    let mut settings = Settings::default();
    let lookup = lookup_from(&[
        (PORT_VAR, "9555"),
        (NAME_VAR, "orders"),
        (DRIVER_CLASSPATH_VAR, "/ci/hsqldb.jar"),
        (DATA_DIR_VAR, "build/db"),
        (SHOW_UI_VAR, "false"),
    ]);

    // WHEN: Applying
    settings.apply_overrides(lookup).unwrap();

    // THEN: Every field overridden
    let db = &settings.database;
    assert_eq!(db.port, Some(9555));
    assert_eq!(db.name.as_deref(), Some("orders"));
    assert_eq!(db.driver_classpath.as_deref(), Some("/ci/hsqldb.jar"));
    assert_eq!(db.data_dir, Some(PathBuf::from("build/db")));
    assert!(!db.show_ui);
}

#[test]
fn given_no_variables_when_applied_then_settings_unchanged() {
    let mut settings = Settings::default();

    settings.apply_overrides(|_| None).unwrap();

    assert_eq!(settings, Settings::default());
}

/// **VALUE**: Verifies that a non-numeric port is reported rather than ignored.
///
/// **BUG THIS CATCHES**: Would catch `.ok()`-style parsing that drops bad values.
#[test]
fn given_invalid_port_when_applied_then_returns_validation_error() {
    let mut settings = Settings::default();

    let result = settings.apply_overrides(lookup_from(&[(PORT_VAR, "ninety")]));

    match result {
        Err(SettingsError::ValidationError { reason, .. }) => {
            assert!(reason.contains(PORT_VAR), "Should name the variable: {reason}");
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn given_invalid_flag_when_applied_then_returns_validation_error() {
    let mut settings = Settings::default();

    let result = settings.apply_overrides(lookup_from(&[(SHOW_UI_VAR, "maybe")]));

    assert!(matches!(result, Err(SettingsError::ValidationError { .. })));
}

#[test]
fn given_flag_spellings_when_parsed_then_maps_to_bool() {
    for raw in ["1", "true", "YES", " on "] {
        assert_eq!(parse_flag(raw), Some(true), "{raw}");
    }
    for raw in ["0", "False", "no", "off"] {
        assert_eq!(parse_flag(raw), Some(false), "{raw}");
    }
    assert_eq!(parse_flag(""), None);
}
