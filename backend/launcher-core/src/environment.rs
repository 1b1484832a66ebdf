//! Facts about the host that decide how the server gets started.
//!
//! Everything the launcher would otherwise read from the process environment is
//! collected here once, so the launch logic itself only sees plain values.

use models::Platform;

use std::env::var_os;
use std::ffi::OsString;
use std::path::PathBuf;

use log::debug;

const DISPLAY_VAR: &str = "DISPLAY";
const WAYLAND_DISPLAY_VAR: &str = "WAYLAND_DISPLAY";
const JAVA_HOME_VAR: &str = "JAVA_HOME";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub platform: Platform,
    /// No graphical display is available to open the server window on.
    pub headless: bool,
    /// `file:` URLs of the jars that make up the UI server.
    pub ui_classpath: Vec<String>,
    /// Fallback runtime location when `java` is not on `PATH`.
    pub java_home: Option<PathBuf>,
}

impl Environment {
    /// Probe the running host.
    pub fn detect(ui_classpath: Vec<String>) -> Self {
        let platform = Platform::current();
        let headless = headless_from(
            platform,
            cfg!(target_os = "macos"),
            var_os(DISPLAY_VAR),
            var_os(WAYLAND_DISPLAY_VAR),
        );
        let java_home = var_os(JAVA_HOME_VAR)
            .filter(|home| !home.is_empty())
            .map(PathBuf::from);

        debug!("Detected environment: platform={platform}, headless={headless}");

        Self {
            platform,
            headless,
            ui_classpath,
            java_home,
        }
    }

    /// A display-less host of the given platform with no UI jars.
    pub fn headless(platform: Platform) -> Self {
        Self {
            platform,
            headless: true,
            ui_classpath: Vec::new(),
            java_home: None,
        }
    }
}

/// Windows and macOS always have a window server; X11/Wayland hosts need a display variable.
pub(crate) fn headless_from(
    platform: Platform,
    is_macos: bool,
    display: Option<OsString>,
    wayland_display: Option<OsString>,
) -> bool {
    if platform == Platform::Windows || is_macos {
        return false;
    }

    let has_display = |value: &Option<OsString>| value.as_ref().is_some_and(|v| !v.is_empty());

    !(has_display(&display) || has_display(&wayland_display))
}
