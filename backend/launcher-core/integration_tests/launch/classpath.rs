use launcher_core::error::launch::LaunchError;
use launcher_core::launch::classpath::{compose_classpath, resolve_classpath_urls};

use models::Platform;

use std::path::PathBuf;

use url::Url;

/// **VALUE**: Verifies that `file:` URLs resolve to the same paths they were built from.
///
/// **WHY THIS MATTERS**: The UI server's jars are handed over as URLs. A wrong conversion
/// (percent-encoding, missing leading slash) produces a classpath the JVM cannot load.
#[test]
fn given_file_urls_when_resolved_then_returns_absolute_paths() {
    // GIVEN: URLs built from real absolute paths, one with a space
    let dir = std::env::temp_dir();
    let first = dir.join("ui launcher.jar");
    let second = dir.join("commons.jar");
    let urls = vec![
        Url::from_file_path(&first).unwrap().to_string(),
        Url::from_file_path(&second).unwrap().to_string(),
    ];

    // WHEN: Resolving
    let paths = resolve_classpath_urls(&urls).unwrap();

    // THEN: Round-trips to the original paths, order kept
    assert_eq!(paths, vec![first, second]);
}

/// **VALUE**: Verifies that malformed URLs fail with a classpath resolution error.
///
/// **WHY THIS MATTERS**: A typo in the UI classpath must stop the build with a clear message
/// instead of launching a server that dies on startup.
#[test]
fn given_malformed_url_when_resolved_then_returns_classpath_error() {
    // GIVEN: A string that is not a URL
    let urls = vec![String::from("::not a url::")];

    // WHEN: Resolving
    let result = resolve_classpath_urls(&urls);

    // THEN: ClasspathResolution naming the entry
    match result {
        Err(LaunchError::ClasspathResolution { message, .. }) => {
            assert!(message.contains("::not a url::"), "{message}");
        }
        other => panic!("Expected ClasspathResolution, got {other:?}"),
    }
}

#[test]
fn given_non_file_url_when_resolved_then_returns_classpath_error() {
    let urls = vec![String::from("https://repo.example.com/hsqldb.jar")];

    let result = resolve_classpath_urls(&urls);

    assert!(matches!(
        result,
        Err(LaunchError::ClasspathResolution { .. })
    ));
}

#[test]
fn given_no_urls_when_resolved_then_returns_empty() {
    assert!(resolve_classpath_urls(&[]).unwrap().is_empty());
}

/// **VALUE**: Verifies composition order and separators on both platforms.
///
/// **BUG THIS CATCHES**: Would catch the UI jars being placed before the driver classpath,
/// or the host separator being used instead of the target platform's.
#[test]
fn given_driver_and_paths_when_composed_then_driver_first_with_platform_separator() {
    let paths = vec![PathBuf::from("a.jar"), PathBuf::from("b.jar")];

    assert_eq!(
        compose_classpath("driver.jar", &paths, Platform::Posix),
        "driver.jar:a.jar:b.jar"
    );
    assert_eq!(
        compose_classpath("driver.jar", &paths, Platform::Windows),
        "driver.jar;a.jar;b.jar"
    );
    assert_eq!(
        compose_classpath("driver.jar", &[], Platform::Posix),
        "driver.jar"
    );
}
