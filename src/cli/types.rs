// Standard library
use std::path::PathBuf;

// 3rd party crates
use clap::{Parser, ValueEnum};

/// Keeps a Hetzner DNS zone pointed at this machine's public IP address.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Set a logging level
    #[arg(
        short = 'l',
        long = "logLevel",
        value_enum,
        ignore_case = true,
        default_value_t = LogLevel::Info
    )]
    pub log_level: LogLevel,

    /// Set the config file location [default: conf.json next to the executable]
    #[arg(short = 'c', long = "configFile")]
    pub config_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Critical,
    Error,
    #[value(alias = "warn")]
    Warning,
    Info,
    Debug,
}
