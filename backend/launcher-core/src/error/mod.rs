pub mod launch;
pub mod settings;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Launch(#[from] launch::LaunchError),

    #[error(transparent)]
    Settings(#[from] settings::SettingsError),
}
