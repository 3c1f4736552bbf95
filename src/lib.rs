//! Dynamic DNS updater for the Hetzner DNS API.
//!
//! One invocation resolves the machine's public IP, stamps it into every
//! configured record, submits a single bulk update and mails a warning when
//! the run does not end cleanly. Scheduling is left to cron or a timer.

pub mod cli;
pub mod logging;
pub mod notifier;
pub mod providers;
pub mod runner;
pub mod settings;
pub mod utility;
