pub mod environment;
pub mod error;
pub mod launch;
pub mod readiness;
pub mod settings;

#[cfg(test)]
mod tests;

/// Entry point of the plain HSQLDB network server.
pub const HSQLDB_SERVER_MAIN: &str = "org.hsqldb.server.Server";

/// Entry point of the HSQLDB server wrapper that opens a management window.
pub const HSQLDB_UI_MAIN: &str = "com.haulmont.gradle.hsql.CubaHSQLDBServer";

pub const SETTINGS_FILE_NAME: &str = "hsqldb.toml";
pub const ENV_FILE_NAME: &str = ".env";
