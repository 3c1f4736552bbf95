// 3rd party crates
use thiserror::Error;

/// Custom error type for DNS provider operations.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),

    #[error("HTTP client error: {0}")]
    HttpClientBuild(#[source] reqwest::Error),

    #[error("Failed to send bulk update request: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Failed to update DNS records (HTTP {status}): {body}")]
    UpdateRequestFailed { status: u16, body: String },

    #[error("Failed to parse bulk update response: {message} - Raw: {body}")]
    InvalidResponse { message: String, body: String },
}
