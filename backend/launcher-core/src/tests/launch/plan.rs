// Unit tests for mode resolution and plan helpers

use crate::environment::Environment;
use crate::launch::{LaunchMode, LaunchPlan, plan};

use models::{LaunchConfigBuilder, Platform};

use std::path::PathBuf;

#[test]
fn given_show_ui_and_display_when_resolved_then_ui_mode() {
    assert_eq!(LaunchMode::resolve(true, false), LaunchMode::Ui);
}

/// **VALUE**: Verifies that a missing display forces headless even when the UI is requested.
///
/// **BUG THIS CATCHES**: Would catch if `show_ui` alone decides the mode, which would try to
/// open a window on a CI agent.
#[test]
fn given_show_ui_without_display_when_resolved_then_headless_mode() {
    assert_eq!(LaunchMode::resolve(true, true), LaunchMode::Headless);
    assert_eq!(LaunchMode::resolve(false, false), LaunchMode::Headless);
    assert_eq!(LaunchMode::resolve(false, true), LaunchMode::Headless);
}

fn plan_for(platform: Platform, mode: LaunchMode, program: &str) -> LaunchPlan {
    LaunchPlan {
        mode,
        platform,
        command: vec![program.to_string()],
        working_directory: PathBuf::from("."),
    }
}

/// **VALUE**: Verifies that only Windows headless commands are passed to the shell verbatim.
///
/// **WHY THIS MATTERS**: Verbatim arguments skip Rust's escaping. Applying that to the UI
/// command would break paths with spaces; skipping it for `cmd.exe` would double-escape quotes.
#[test]
fn given_plans_when_is_verbatim_checked_then_only_windows_headless() {
    assert!(plan_for(Platform::Windows, LaunchMode::Headless, "cmd.exe").is_verbatim());
    assert!(!plan_for(Platform::Windows, LaunchMode::Ui, "java.exe").is_verbatim());
    assert!(!plan_for(Platform::Posix, LaunchMode::Headless, "java").is_verbatim());
}

/// **VALUE**: Verifies that the `JAVA_HOME` fallback only applies when the runtime is the program.
///
/// **BUG THIS CATCHES**: Would catch if `cmd.exe` were replaced with a java path on fallback.
#[test]
fn given_plans_when_invokes_runtime_directly_checked_then_matches_program() {
    assert!(plan_for(Platform::Posix, LaunchMode::Headless, "java").invokes_runtime_directly());
    assert!(plan_for(Platform::Windows, LaunchMode::Ui, "java.exe").invokes_runtime_directly());
    assert!(!plan_for(Platform::Windows, LaunchMode::Headless, "cmd.exe").invokes_runtime_directly());
}

/// **VALUE**: Verifies that headless plans never touch the UI classpath.
///
/// **WHY THIS MATTERS**: A broken UI jar URL must not fail a headless build agent that never
/// opens the UI.
///
/// **BUG THIS CATCHES**: Would catch if classpath resolution runs before the mode is known.
#[test]
fn given_headless_env_with_bad_ui_url_when_planned_then_succeeds() {
    // GIVEN: A headless environment with an unparseable UI entry
    let config = LaunchConfigBuilder::default()
        .with_port(9010)
        .with_working_directory("/work/db")
        .with_database_name("cuba")
        .with_driver_classpath("/libs/hsqldb.jar")
        .build()
        .unwrap();
    let mut env = Environment::headless(Platform::Posix);
    env.ui_classpath = vec![String::from("not a url")];

    // WHEN: Planning
    let plan = plan(&config, &env).unwrap();

    // THEN: Headless plan in the configured directory
    assert_eq!(plan.mode, LaunchMode::Headless);
    assert_eq!(plan.working_directory, PathBuf::from("/work/db"));
    assert_eq!(plan.command[0], "java");
}

fn ui_config() -> models::LaunchConfig {
    LaunchConfigBuilder::default()
        .with_port(9010)
        .with_working_directory("/p/deploy/hsqldb")
        .with_database_name("cuba")
        .with_driver_classpath("lib/hsqldb.jar")
        .build()
        .unwrap()
}

fn desktop_env(ui_classpath: Vec<String>) -> Environment {
    Environment {
        platform: Platform::Posix,
        headless: false,
        ui_classpath,
        java_home: None,
    }
}

/// **VALUE**: Verifies that UI mode without UI classpath entries falls back to headless.
///
/// **WHY THIS MATTERS**: `show_ui` defaults to true, so every desktop run without a
/// configured UI jar would otherwise start a JVM for a main class that is not on the
/// classpath. It exits at once and the build continues without a database.
///
/// **BUG THIS CATCHES**: Would catch a plan that runs the UI server class with only the
/// driver jar on the classpath.
#[test]
fn given_display_and_empty_ui_classpath_when_planned_then_falls_back_to_headless() {
    // GIVEN: A desktop environment with no UI classpath
    let config = ui_config();
    let env = desktop_env(Vec::new());

    // WHEN: Planning
    let plan = plan(&config, &env).unwrap();

    // THEN: The plain server is started instead of the UI wrapper
    assert_eq!(plan.mode, LaunchMode::Headless);
    assert!(plan.command.iter().any(|arg| arg == crate::HSQLDB_SERVER_MAIN));
    assert!(!plan.command.iter().any(|arg| arg == crate::HSQLDB_UI_MAIN));
}

#[cfg(unix)]
#[test]
fn given_display_and_ui_classpath_when_planned_then_ui_mode() {
    let config = ui_config();
    let env = desktop_env(vec![String::from("file:///opt/ui/launcher.jar")]);

    let plan = plan(&config, &env).unwrap();

    assert_eq!(plan.mode, LaunchMode::Ui);
    assert_eq!(plan.command[1], "-cp");
    assert_eq!(plan.command[2], "lib/hsqldb.jar:/opt/ui/launcher.jar");
    assert!(plan.command.iter().any(|arg| arg == crate::HSQLDB_UI_MAIN));
}
