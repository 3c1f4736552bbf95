// 3rd party crates
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log directive: {0}")]
    Directive(#[from] tracing_subscriber::filter::ParseError),

    #[error("Failed to install log subscriber: {0}")]
    Install(String),
}
