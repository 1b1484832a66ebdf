use crate::launch::LaunchMode;
use crate::launch::classpath::compose_classpath;
use crate::{HSQLDB_SERVER_MAIN, HSQLDB_UI_MAIN};

use models::{LaunchConfig, Platform};

use std::path::{Path, PathBuf};
use std::process::{Command as StdCommand, Stdio};

const WINDOWS_SHELL: &str = "cmd.exe";
const WINDOWS_SHELL_RUN_FLAG: &str = "/C";
const CLASSPATH_FLAG: &str = "-cp";
const PORT_FLAG: &str = "--port";
const DATABASE_FLAG: &str = "--database.0";
const DBNAME_FLAG: &str = "--dbname.0";

/// Argument vector that starts the server in the given mode.
///
/// `ui_paths` are the resolved UI jars and are only consulted in [`LaunchMode::Ui`].
pub fn build_command(
    config: &LaunchConfig,
    platform: Platform,
    mode: LaunchMode,
    ui_paths: &[PathBuf],
) -> Vec<String> {
    match mode {
        LaunchMode::Ui => build_ui_command(config, platform, ui_paths),
        LaunchMode::Headless => build_headless_command(config, platform),
    }
}

fn build_ui_command(config: &LaunchConfig, platform: Platform, ui_paths: &[PathBuf]) -> Vec<String> {
    vec![
        platform.java_binary().to_string(),
        CLASSPATH_FLAG.to_string(),
        compose_classpath(config.driver_classpath(), ui_paths, platform),
        HSQLDB_UI_MAIN.to_string(),
        config.port().to_string(),
        config.working_directory().display().to_string(),
        config.database_name().to_string(),
    ]
}

fn build_headless_command(config: &LaunchConfig, platform: Platform) -> Vec<String> {
    let port = config.port().to_string();
    let name = config.database_name();
    let database = format!("file:\"{name}\"");

    match platform {
        Platform::Windows => vec![
            WINDOWS_SHELL.to_string(),
            WINDOWS_SHELL_RUN_FLAG.to_string(),
            platform.java_binary().to_string(),
            CLASSPATH_FLAG.to_string(),
            format!("\"{}\"", config.driver_classpath()),
            HSQLDB_SERVER_MAIN.to_string(),
            PORT_FLAG.to_string(),
            port,
            DATABASE_FLAG.to_string(),
            database,
            DBNAME_FLAG.to_string(),
            format!("\"{name}\""),
        ],
        Platform::Posix => vec![
            platform.java_binary().to_string(),
            CLASSPATH_FLAG.to_string(),
            config.driver_classpath().to_string(),
            HSQLDB_SERVER_MAIN.to_string(),
            PORT_FLAG.to_string(),
            port,
            DATABASE_FLAG.to_string(),
            database,
            DBNAME_FLAG.to_string(),
            name.to_string(),
        ],
    }
}

/// Single-line rendering for logs.
pub fn format_command_line(argv: &[String]) -> String {
    argv.join(" ")
}

/// Process builder for `argv` with null stdio, detached from this process group.
///
/// With `verbatim` set, arguments are handed to the Windows shell without extra
/// escaping so embedded quotes survive; other platforms ignore the flag.
pub(crate) fn to_std_command(argv: &[String], working_directory: &Path, verbatim: bool) -> Option<StdCommand> {
    let (program, args) = argv.split_first()?;

    let mut cmd = StdCommand::new(program);
    push_args(&mut cmd, args, verbatim);
    cmd.current_dir(working_directory)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    detach(&mut cmd);

    Some(cmd)
}

#[cfg(windows)]
fn push_args(cmd: &mut StdCommand, args: &[String], verbatim: bool) {
    use std::os::windows::process::CommandExt;

    if verbatim {
        for arg in args {
            cmd.raw_arg(arg);
        }
    } else {
        cmd.args(args);
    }
}

#[cfg(not(windows))]
fn push_args(cmd: &mut StdCommand, args: &[String], _verbatim: bool) {
    cmd.args(args);
}

#[cfg(unix)]
fn detach(cmd: &mut StdCommand) {
    use std::os::unix::process::CommandExt;

    cmd.process_group(0);
}

#[cfg(windows)]
fn detach(cmd: &mut StdCommand) {
    use std::os::windows::process::CommandExt;

    const DETACHED_PROCESS: u32 = 0x0000_0008;
    const CREATE_NEW_PROCESS_GROUP: u32 = 0x0000_0200;

    cmd.creation_flags(DETACHED_PROCESS | CREATE_NEW_PROCESS_GROUP);
}

#[cfg(not(any(unix, windows)))]
fn detach(_cmd: &mut StdCommand) {}
