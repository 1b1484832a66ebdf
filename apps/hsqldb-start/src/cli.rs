use launcher_core::settings::Settings;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use humantime::parse_duration;
use log::LevelFilter;

/// Start an HSQLDB server and wait until it accepts connections.
///
/// Values come from `<project-root>/hsqldb.toml`, then `HSQLDB_*` environment
/// variables (a project `.env` file is loaded first), then these flags.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "hsqldb-start", version, about)]
pub struct Cli {
    /// Project root; defaults to the current directory
    #[arg(long, value_name = "DIR")]
    pub project_root: Option<PathBuf>,

    /// Settings file; defaults to <project-root>/hsqldb.toml
    #[arg(long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Server port
    #[arg(long)]
    pub port: Option<u16>,

    /// Database name
    #[arg(long, value_name = "NAME")]
    pub db_name: Option<String>,

    /// Data directory; defaults to <project-root>/deploy/hsqldb.
    /// A relative path is resolved against the project root, not the current directory
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Classpath containing the HSQLDB driver
    #[arg(long, value_name = "CLASSPATH")]
    pub driver_classpath: Option<String>,

    /// `file:` URL of a UI server jar (repeatable)
    #[arg(long = "ui-classpath", value_name = "URL")]
    pub ui_classpath: Vec<String>,

    /// Never open the UI window
    #[arg(long)]
    pub headless: bool,

    /// Host to probe for readiness
    #[arg(long)]
    pub host: Option<String>,

    /// How long to wait for the port, e.g. "10s"
    #[arg(long, value_parser = parse_duration)]
    pub max_wait: Option<Duration>,

    /// Time between connection attempts, e.g. "1s"
    #[arg(long, value_parser = parse_duration)]
    pub poll_interval: Option<Duration>,

    /// Fail when the server does not accept connections in time
    #[arg(long)]
    pub strict: bool,

    /// Log directory; defaults to <project-root>/build/logs
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long)]
    pub log_level: Option<LevelFilter>,

    /// Print the command line without creating directories or spawning
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Overlay flags that were given onto `settings`.
    pub fn apply_to(&self, settings: &mut Settings) {
        let db = &mut settings.database;

        if let Some(port) = self.port {
            db.port = Some(port);
        }
        if let Some(ref name) = self.db_name {
            db.name = Some(name.clone());
        }
        if let Some(ref dir) = self.data_dir {
            db.data_dir = Some(dir.clone());
        }
        if let Some(ref classpath) = self.driver_classpath {
            db.driver_classpath = Some(classpath.clone());
        }
        if !self.ui_classpath.is_empty() {
            db.ui_classpath = self.ui_classpath.clone();
        }
        if self.headless {
            db.show_ui = false;
        }

        let readiness = &mut settings.readiness;

        if let Some(ref host) = self.host {
            readiness.host = host.clone();
        }
        if let Some(max_wait) = self.max_wait {
            readiness.max_wait = max_wait;
        }
        if let Some(poll_interval) = self.poll_interval {
            readiness.poll_interval = poll_interval;
        }
        if self.strict {
            readiness.strict = true;
        }
    }
}
