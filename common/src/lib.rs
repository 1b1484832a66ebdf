//! Shared building blocks for the HSQLDB launcher.
//!
//! ## Architecture
//!
//! - **common** (this crate): error location tracking shared by every layer
//! - **models**: launch configuration and readiness check data
//! - **launcher-core**: classpath composition, spawning and readiness probing
//! - **hsqldb-start**: command-line task wiring everything together

pub mod error;

pub use error::error_location::ErrorLocation;
