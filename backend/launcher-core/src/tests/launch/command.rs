// Unit tests for command line construction
// No processes are spawned here

use crate::launch::LaunchMode;
use crate::launch::command::{build_command, format_command_line, to_std_command};
use crate::{HSQLDB_SERVER_MAIN, HSQLDB_UI_MAIN};

use models::{LaunchConfig, LaunchConfigBuilder, Platform};

use std::path::PathBuf;

fn config(classpath: &str, working_directory: &str) -> LaunchConfig {
    LaunchConfigBuilder::default()
        .with_port(9010)
        .with_working_directory(working_directory)
        .with_database_name("cuba")
        .with_driver_classpath(classpath)
        .with_show_ui(false)
        .build()
        .unwrap()
}

/// **VALUE**: Verifies the exact Windows headless command line, argument by argument.
///
/// **WHY THIS MATTERS**: The arguments pass through `cmd.exe /C`, which relies on the embedded
/// quotes around the classpath and database name. Any reordering or lost quote starts the
/// server with the wrong database, or not at all.
///
/// **BUG THIS CATCHES**: Would catch changes to flag order, quoting, or the runtime name.
#[test]
fn given_windows_headless_when_build_command_called_then_matches_cmd_template() {
    // GIVEN: A config and the Windows platform
    let config = config(r"C:\libs\hsqldb.jar", r"C:\work\deploy\hsqldb");

    // WHEN: Building the headless command
    let argv = build_command(&config, Platform::Windows, LaunchMode::Headless, &[]);

    // THEN: Matches the cmd.exe template exactly
    assert_eq!(
        argv,
        vec![
            "cmd.exe",
            "/C",
            "java.exe",
            "-cp",
            r#""C:\libs\hsqldb.jar""#,
            HSQLDB_SERVER_MAIN,
            "--port",
            "9010",
            "--database.0",
            r#"file:"cuba""#,
            "--dbname.0",
            r#""cuba""#,
        ]
    );
}

/// **VALUE**: Verifies the exact POSIX headless command line.
///
/// **WHY THIS MATTERS**: Without a shell the classpath and database name must be passed bare,
/// except for the quoted `file:` database URL the server expects.
///
/// **BUG THIS CATCHES**: Would catch if Windows quoting leaks into the POSIX template.
#[test]
fn given_posix_headless_when_build_command_called_then_matches_java_template() {
    // GIVEN: A config and the POSIX platform
    let config = config("/libs/hsqldb.jar", "/work/deploy/hsqldb");

    // WHEN: Building the headless command
    let argv = build_command(&config, Platform::Posix, LaunchMode::Headless, &[]);

    // THEN: Matches the java template exactly
    assert_eq!(
        argv,
        vec![
            "java",
            "-cp",
            "/libs/hsqldb.jar",
            HSQLDB_SERVER_MAIN,
            "--port",
            "9010",
            "--database.0",
            r#"file:"cuba""#,
            "--dbname.0",
            "cuba",
        ]
    );
}

/// **VALUE**: Verifies the UI command: composed classpath, UI entry point, positional args.
///
/// **WHY THIS MATTERS**: The UI wrapper reads port, data directory and name by position.
/// The driver classpath must come before the UI jars so the bundled driver wins.
///
/// **BUG THIS CATCHES**: Would catch swapped positional arguments or classpath order.
#[test]
fn given_ui_mode_when_build_command_called_then_composes_classpath_and_positional_args() {
    // GIVEN: UI jars
    let config = config("/libs/hsqldb.jar", "/work/deploy/hsqldb");
    let ui_paths = vec![
        PathBuf::from("/opt/ui/launcher.jar"),
        PathBuf::from("/opt/ui/commons.jar"),
    ];

    // WHEN: Building the UI command
    let argv = build_command(&config, Platform::Posix, LaunchMode::Ui, &ui_paths);

    // THEN: java -cp <driver>:<ui...> <UiMain> <port> <dir> <name>
    assert_eq!(
        argv,
        vec![
            "java",
            "-cp",
            "/libs/hsqldb.jar:/opt/ui/launcher.jar:/opt/ui/commons.jar",
            HSQLDB_UI_MAIN,
            "9010",
            "/work/deploy/hsqldb",
            "cuba",
        ]
    );
}

#[test]
fn given_windows_ui_mode_when_build_command_called_then_uses_semicolon_and_java_exe() {
    let config = config(r"C:\libs\hsqldb.jar", r"C:\work\db");
    let ui_paths = vec![PathBuf::from(r"C:\ui\launcher.jar")];

    let argv = build_command(&config, Platform::Windows, LaunchMode::Ui, &ui_paths);

    assert_eq!(argv[0], "java.exe");
    assert_eq!(argv[2], r"C:\libs\hsqldb.jar;C:\ui\launcher.jar");
}

#[test]
fn given_argv_when_formatted_then_joins_with_spaces() {
    let argv = vec![
        String::from("java"),
        String::from("-cp"),
        String::from("a.jar"),
    ];

    assert_eq!(format_command_line(&argv), "java -cp a.jar");
}

/// **VALUE**: Verifies that the process builder uses the first argument as the program and
/// the configured working directory.
///
/// **BUG THIS CATCHES**: Would catch an off-by-one that passes the program name as its own
/// first argument, or a missing `current_dir`.
#[test]
fn given_argv_when_to_std_command_called_then_splits_program_and_sets_directory() {
    // GIVEN: An argv and directory
    let argv = vec![
        String::from("java"),
        String::from("-cp"),
        String::from("a.jar"),
    ];
    let dir = std::env::temp_dir();

    // WHEN: Building the std command
    let cmd = to_std_command(&argv, &dir, false).unwrap();

    // THEN: Program, args and directory are set
    assert_eq!(cmd.get_program(), "java");
    let args: Vec<_> = cmd.get_args().collect();
    assert_eq!(args, vec!["-cp", "a.jar"]);
    assert_eq!(cmd.get_current_dir(), Some(dir.as_path()));
}

#[test]
fn given_empty_argv_when_to_std_command_called_then_returns_none() {
    assert!(to_std_command(&[], &std::env::temp_dir(), false).is_none());
}
