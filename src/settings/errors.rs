// Standard library
use std::path::PathBuf;

// 3rd party crates
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Invalid config file location: {0:?}")]
    ConfigMissing(PathBuf),

    #[error("Failed to read config file {path:?}: {source}")]
    ConfigUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    ConfigParseError(#[from] serde_json::Error),

    #[error("Missing configuration field '{0}'")]
    MissingField(&'static str),

    #[error("Invalid configuration field '{field}': {value}")]
    InvalidField { field: &'static str, value: String },
}
