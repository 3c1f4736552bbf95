// Standard library
use std::path::PathBuf;

// 3rd party crates
use clap::Parser;

// Project imports
use hetzner_dyndns::cli::Cli;
use hetzner_dyndns::logging::init_logging;
use hetzner_dyndns::runner::run;
use hetzner_dyndns::settings::functions::{default_config_path, default_log_path};

/// Main entry point for the DDNS updater.
///
/// Runs exactly once: the severity of the run goes to the log file and,
/// on failure, to the warning mail. The process itself always exits normally.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // An unknown log level is rejected here, before any log file exists.
    let cli: Cli = Cli::parse();

    if let Err(e) = init_logging(cli.log_level, &default_log_path()) {
        eprintln!("{}", e);
        return;
    }

    let config_path: PathBuf = cli.config_file.unwrap_or_else(default_config_path);
    run(&config_path).await;
}
