use launcher_core::error::settings::SettingsError;

use common::ErrorLocation;
use models::ModelError;

use std::panic::Location;
use std::path::PathBuf;

/// **VALUE**: Verifies that builder validation errors become settings validation errors.
///
/// **WHY THIS MATTERS**: Users see settings problems, not builder internals. The message and
/// original location must survive the conversion.
#[test]
fn given_model_error_when_converted_then_keeps_message_and_location() {
    // GIVEN: A model validation error
    let location = ErrorLocation::from(Location::caller());
    let err = ModelError::Validation {
        message: String::from("Port is required"),
        location,
    };

    // WHEN: Converting
    let converted = SettingsError::from(err);

    // THEN: Same reason and location
    match converted {
        SettingsError::ValidationError {
            reason,
            location: converted_location,
        } => {
            assert_eq!(reason, "Port is required");
            assert_eq!(converted_location, location);
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn given_parse_error_when_formatted_then_names_file() {
    let err = SettingsError::ParseError {
        location: ErrorLocation::from(Location::caller()),
        path: PathBuf::from("/work/app/hsqldb.toml"),
        reason: String::from("expected `]`"),
    };

    let text = err.to_string();

    assert!(text.starts_with("Settings Parse Error: /work/app/hsqldb.toml: expected `]`"));
}
