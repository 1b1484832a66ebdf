use launcher_core::error::CoreError;
use launcher_core::error::launch::LaunchError;

use common::ErrorLocation;

use std::error::Error;
use std::io::Error as IoError;
use std::io::ErrorKind;
use std::panic::Location;

/// **VALUE**: Verifies that spawn errors carry kind, message and source location.
///
/// **WHY THIS MATTERS**: Spawn failures end the build step. The printed message is all the
/// developer gets, so it has to say what failed and where.
#[test]
fn given_spawn_error_when_formatted_then_includes_kind_message_and_location() {
    // GIVEN: A Spawn error
    let err = LaunchError::Spawn {
        message: String::from("Unable to start HSQL server"),
        location: ErrorLocation::from(Location::caller()),
        source: Box::new(IoError::new(ErrorKind::NotFound, "java not found")),
    };

    // WHEN: Formatting
    let text = err.to_string();

    // THEN
    assert!(text.starts_with("Spawn Error: Unable to start HSQL server ["));
    assert!(text.contains("launch.rs"));
}

/// **VALUE**: Verifies that the OS error stays reachable through `source()`.
///
/// **BUG THIS CATCHES**: Would catch removal of `#[source]` from the Spawn variant.
#[test]
fn given_spawn_error_when_source_inspected_then_preserves_io_error() {
    let err = LaunchError::Spawn {
        message: String::from("Unable to start HSQL server"),
        location: ErrorLocation::from(Location::caller()),
        source: Box::new(IoError::new(ErrorKind::PermissionDenied, "permission denied")),
    };

    let source = err.source().map(|s| s.to_string());

    assert_eq!(source.as_deref(), Some("permission denied"));
}

#[test]
fn given_classpath_error_when_wrapped_in_core_error_then_display_is_transparent() {
    let err = LaunchError::ClasspathResolution {
        message: String::from("Unable to compose path from 'x'"),
        location: ErrorLocation::from(Location::caller()),
    };
    let expected = err.to_string();

    let core: CoreError = err.into();

    assert_eq!(core.to_string(), expected);
    assert!(expected.starts_with("Classpath Resolution Error:"));
}
