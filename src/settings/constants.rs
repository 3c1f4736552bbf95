/// Configuration file looked up next to the executable when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "conf.json";

/// Log file written next to the executable.
pub const LOG_FILE: &str = "dyndns.log";
