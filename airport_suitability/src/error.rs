use std::io;

use config::ConfigError;
use thiserror::Error;

pub(crate) type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub(crate) enum ApplicationError {
    #[error("Error regarding config: {0}")]
    ConfigError(#[from] ConfigError),
    #[error("System input/output error: {0}")]
    IoError(#[from] io::Error),
    #[error("Failed to write JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Could not determine a config directory for this user")]
    MissingProjectDirectory,
    #[error("Aircraft type {0} is not in the config")]
    UnknownAircraft(String),
}
