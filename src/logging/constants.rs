/// Rotate the log file once it holds this many bytes (5 MiB).
pub const MAX_LOG_BYTES: usize = 5 * 1024 * 1024;

/// Number of rotated log files kept alongside the active one.
pub const LOG_GENERATIONS: usize = 5;

/// Timestamp format for log lines.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Dependencies whose chatter is capped at ERROR.
pub const QUIET_TARGETS: [&str; 5] = ["hyper", "hyper_util", "reqwest", "rustls", "lettre"];
