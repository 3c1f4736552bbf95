// 3rd party crates
use chrono::{DateTime, Local};

// Current module imports
use super::constants::TIMESTAMP_FORMAT;

/// Plain text body of the warning mail.
pub fn warning_body(outcome_text: &str, timestamp: DateTime<Local>) -> String {
    format!(
        "Warning the DynDns run has ended with {}.\nTimestamp: {}\n",
        outcome_text,
        timestamp.format(TIMESTAMP_FORMAT)
    )
}
