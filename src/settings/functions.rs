// Standard library
use std::env;
use std::path::{Path, PathBuf};

// Current module imports
use super::constants::{DEFAULT_CONFIG_FILE, LOG_FILE};

/// Directory holding the running executable, or the working directory if
/// that cannot be determined.
pub fn program_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn default_config_path() -> PathBuf {
    program_dir().join(DEFAULT_CONFIG_FILE)
}

pub fn default_log_path() -> PathBuf {
    program_dir().join(LOG_FILE)
}
