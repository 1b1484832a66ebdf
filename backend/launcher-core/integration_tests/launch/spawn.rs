use launcher_core::environment::Environment;
use launcher_core::error::launch::LaunchError;
use launcher_core::launch::spawn::spawn_detached;
use launcher_core::launch::{LaunchMode, LaunchPlan, start};
use launcher_core::readiness::Readiness;

use models::{LaunchConfigBuilder, Platform, ReadinessCheck};

use std::net::TcpListener as StdTcpListener;
use std::path::PathBuf;
use std::time::Duration;

use tempfile::TempDir;

fn plan_with(command: &[&str]) -> LaunchPlan {
    LaunchPlan {
        mode: LaunchMode::Headless,
        platform: Platform::current(),
        command: command.iter().map(|s| s.to_string()).collect(),
        working_directory: std::env::temp_dir(),
    }
}

fn free_port() -> u16 {
    let listener = StdTcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

/// **VALUE**: Verifies that a missing executable surfaces as `LaunchError::Spawn`.
///
/// **WHY THIS MATTERS**: A machine without the runtime installed must fail the build step
/// with the OS error attached, not panic or report success.
///
/// **BUG THIS CATCHES**: Would catch if spawn errors are logged and swallowed.
#[tokio::test]
async fn given_missing_binary_when_spawned_then_returns_spawn_error() {
    // GIVEN: A program that does not exist
    let plan = plan_with(&["hsqldb-launcher-no-such-binary"]);

    // WHEN: Spawning
    let result = spawn_detached(&plan, None);

    // THEN: Spawn error with source
    match result {
        Err(LaunchError::Spawn { message, .. }) => {
            assert!(message.contains("Unable to start HSQL server"), "{message}");
        }
        other => panic!("Expected Spawn error, got {other:?}"),
    }
}

/// **VALUE**: Verifies that `JAVA_HOME` is not used for commands that do not run the runtime.
///
/// **BUG THIS CATCHES**: Would catch the fallback rewriting an arbitrary program into java.
#[tokio::test]
async fn given_non_runtime_program_when_not_found_then_java_home_not_tried() {
    // GIVEN: A missing non-runtime program and a JAVA_HOME
    let plan = plan_with(&["hsqldb-launcher-no-such-shell"]);
    let java_home = PathBuf::from("/nonexistent/jdk");

    // WHEN: Spawning
    let result = spawn_detached(&plan, Some(&java_home));

    // THEN: The original program is reported
    match result {
        Err(LaunchError::Spawn { message, .. }) => {
            assert!(!message.contains("/nonexistent/jdk"), "{message}");
        }
        other => panic!("Expected Spawn error, got {other:?}"),
    }
}

/// **VALUE**: Verifies that a real process is spawned without waiting for it.
///
/// **WHY THIS MATTERS**: The database server runs for the whole developer session. If the
/// launcher waited on the child, the build step would never finish.
#[cfg(unix)]
#[tokio::test]
async fn given_short_lived_command_when_spawned_then_returns_pid_without_waiting() {
    // GIVEN: A command that sleeps far longer than the test takes
    let plan = plan_with(&["sh", "-c", "sleep 5"]);

    // WHEN: Spawning
    let started = std::time::Instant::now();
    let pid = spawn_detached(&plan, None).unwrap();

    // THEN: A PID is reported and the call returned immediately
    assert!(pid.is_some_and(|p| p > 0));
    assert!(started.elapsed() < Duration::from_secs(5));
}

/// **VALUE**: Exercises the whole start sequence: directory creation, headless spawn and a
/// readiness wait that runs out without failing.
///
/// **WHY THIS MATTERS**: A server that never opens its port must not fail the build in the
/// default (non-strict) mode; the outcome reports the timeout instead.
///
/// **ENVIRONMENT-DEPENDENT**: Uses a stub `java` under a temporary `JAVA_HOME`. If a real
/// runtime is on `PATH` it is started instead and exits on the bogus classpath; the outcome
/// is the same.
#[cfg(unix)]
#[tokio::test]
async fn given_server_that_never_listens_when_started_then_reports_timed_out() {
    use std::os::unix::fs::PermissionsExt;

    // GIVEN: A project root, a stub runtime and a port nobody listens on
    let root = TempDir::new().unwrap();
    let bin = root.path().join("jdk").join("bin");
    std::fs::create_dir_all(&bin).unwrap();
    let stub = bin.join("java");
    std::fs::write(&stub, "#!/bin/sh\nexit 0\n").unwrap();
    std::fs::set_permissions(&stub, std::fs::Permissions::from_mode(0o755)).unwrap();

    let port = free_port();
    let config = LaunchConfigBuilder::default()
        .with_port(port)
        .with_project_root(root.path())
        .with_database_name("cuba")
        .with_driver_classpath("/nonexistent/hsqldb.jar")
        .build()
        .unwrap();
    let mut env = Environment::headless(Platform::Posix);
    env.java_home = Some(root.path().join("jdk"));
    let check = ReadinessCheck::for_port(port)
        .with_host("127.0.0.1")
        .with_max_wait(Duration::from_millis(300))
        .with_poll_interval(Duration::from_millis(100));

    // WHEN: Starting
    let outcome = start(&config, &env, &check).await.unwrap();

    // THEN: Headless, directory created, readiness timed out
    assert_eq!(outcome.mode, LaunchMode::Headless);
    assert!(root.path().join("deploy").join("hsqldb").is_dir());
    assert!(matches!(outcome.readiness, Readiness::TimedOut { .. }));
}
