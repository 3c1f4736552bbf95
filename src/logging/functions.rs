// Standard library
use std::path::Path;
use std::sync::Mutex;

// 3rd party crates
use file_rotate::compression::Compression;
use file_rotate::suffix::AppendCount;
use file_rotate::{ContentLimit, FileRotate};
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

// Project imports
use crate::cli::LogLevel;

// Current module imports
use super::constants::{LOG_GENERATIONS, MAX_LOG_BYTES, QUIET_TARGETS, TIMESTAMP_FORMAT};
use super::errors::LoggingError;

/// Builds the filter for the selected level, with noisy dependencies quietened.
pub fn build_filter(level: LogLevel) -> Result<EnvFilter, LoggingError> {
    let level: LevelFilter = level.into();
    let mut filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy("");

    for target in QUIET_TARGETS {
        let directive: Directive = format!("{}=error", target).parse()?;
        filter = filter.add_directive(directive);
    }

    Ok(filter)
}

/// Installs the process-wide subscriber writing to a size-rotated log file.
pub fn init_logging(level: LogLevel, log_path: &Path) -> Result<(), LoggingError> {
    let writer = FileRotate::new(
        log_path,
        AppendCount::new(LOG_GENERATIONS),
        ContentLimit::Bytes(MAX_LOG_BYTES),
        Compression::None,
        #[cfg(unix)]
        None,
    );

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(level)?)
        .with_writer(Mutex::new(writer))
        .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))
}
