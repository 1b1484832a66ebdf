mod error;
mod launch;
mod readiness;
mod settings;
