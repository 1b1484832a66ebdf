use launcher_core::launch::ensure_working_directory;

use tempfile::TempDir;

/// **VALUE**: Verifies that a missing data directory is created with its parents.
///
/// **WHY THIS MATTERS**: The server is started with the data directory as its working
/// directory. If it does not exist the spawn fails with a confusing "not found" error.
///
/// **BUG THIS CATCHES**: Would catch `create_dir` instead of `create_dir_all`.
#[test]
fn given_missing_nested_directory_when_ensured_then_created() {
    // GIVEN: A path two levels below a fresh temp dir
    let root = TempDir::new().unwrap();
    let dir = root.path().join("deploy").join("hsqldb");

    // WHEN: Ensuring it exists
    let created = ensure_working_directory(&dir).unwrap();

    // THEN: Created
    assert!(created, "Should report creation");
    assert!(dir.is_dir());
}

/// **VALUE**: Verifies that ensuring an existing directory is a no-op.
///
/// **WHY THIS MATTERS**: The task runs on every build. It must not fail or touch database
/// files that already live in the directory.
#[test]
fn given_existing_directory_when_ensured_then_no_op() {
    // GIVEN: An existing directory with a file in it
    let root = TempDir::new().unwrap();
    let marker = root.path().join("cuba.properties");
    std::fs::write(&marker, "version=2.5").unwrap();

    // WHEN: Ensuring it twice
    let first = ensure_working_directory(root.path()).unwrap();
    let second = ensure_working_directory(root.path()).unwrap();

    // THEN: Nothing created, contents untouched
    assert!(!first);
    assert!(!second);
    assert_eq!(std::fs::read_to_string(&marker).unwrap(), "version=2.5");
}

/// **VALUE**: Verifies that a path blocked by a regular file is reported as an error.
///
/// **BUG THIS CATCHES**: Would catch if the I/O error is swallowed and the launch proceeds.
#[test]
fn given_path_occupied_by_file_when_ensured_then_returns_error() {
    // GIVEN: A regular file where the directory should go
    let root = TempDir::new().unwrap();
    let blocker = root.path().join("hsqldb");
    std::fs::write(&blocker, "").unwrap();

    // WHEN: Ensuring a directory below it
    let result = ensure_working_directory(&blocker.join("data"));

    // THEN: WorkingDirectory error
    assert!(matches!(
        result,
        Err(launcher_core::error::launch::LaunchError::WorkingDirectory { .. })
    ));
}
