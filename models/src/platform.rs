use serde::{Deserialize, Serialize};

use std::fmt::{Display, Formatter, Result as FormatResult};

use const_format::concatcp;

const JAVA: &str = "java";
const JAVA_WINDOWS: &str = concatcp!(JAVA, ".exe");

/// Operating system family a command line is built for.
///
/// Drives the runtime executable name, the classpath separator and the
/// quoting rules of the headless command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Windows,
    Posix,
}

impl Platform {
    /// Platform of the running binary, fixed at compile time.
    pub const fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }

    pub const fn classpath_separator(&self) -> &'static str {
        match self {
            Platform::Windows => ";",
            Platform::Posix => ":",
        }
    }

    pub const fn java_binary(&self) -> &'static str {
        match self {
            Platform::Windows => JAVA_WINDOWS,
            Platform::Posix => JAVA,
        }
    }
}

impl Display for Platform {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        match self {
            Platform::Windows => write!(formatter, "windows"),
            Platform::Posix => write!(formatter, "posix"),
        }
    }
}
