// Unit tests for error module

use crate::error::AppError;

use common::ErrorLocation;
use launcher_core::error::CoreError;
use launcher_core::error::launch::LaunchError;
use launcher_core::error::settings::SettingsError;

use std::panic::Location;

/// **VALUE**: Verifies that launcher errors pass through to the task error unchanged.
///
/// **WHY THIS MATTERS**: The task prints the error as its last log line. Wrapping must not
/// hide the original kind, message or location.
#[test]
fn given_launch_error_when_converted_then_display_is_unchanged() {
    // GIVEN: A NotReady launch error
    let err = LaunchError::NotReady {
        message: String::from("Server at localhost:9010 did not accept connections"),
        location: ErrorLocation::from(Location::caller()),
    };
    let expected = err.to_string();

    // WHEN: Converting
    let app: AppError = err.into();

    // THEN: Same text, Core variant
    assert_eq!(app.to_string(), expected);
    assert!(matches!(app, AppError::Core(CoreError::Launch(_))));
}

#[test]
fn given_settings_error_when_converted_then_wrapped_as_core_settings() {
    let err = SettingsError::ValidationError {
        location: ErrorLocation::from(Location::caller()),
        reason: String::from("Port is required"),
    };

    let app: AppError = err.into();

    assert!(matches!(app, AppError::Core(CoreError::Settings(_))));
    assert!(app.to_string().contains("Port is required"));
}

#[test]
fn given_task_error_when_formatted_then_includes_kind_and_location() {
    let err = AppError::Task {
        message: String::from("Failed to determine current directory"),
        location: ErrorLocation::from(Location::caller()),
    };

    let text = err.to_string();

    assert!(text.starts_with("Task Error: Failed to determine current directory ["));
    assert!(text.contains("error.rs"));
}
