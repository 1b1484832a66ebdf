//! Domain models for the HSQLDB launcher.
//!
//! Pure data structures describing one launch: what to start, where, and how
//! long to wait for it. No process or network access happens here.

pub mod error;
pub mod launch_config;
pub mod platform;
pub mod readiness_check;

pub use common::ErrorLocation;
pub use error::model_error::ModelError;
pub use launch_config::builder::LaunchConfigBuilder;
pub use launch_config::{DEFAULT_DATA_DIR_SEGMENTS, LaunchConfig};
pub use platform::Platform;
pub use readiness_check::ReadinessCheck;

#[cfg(test)]
mod tests;
