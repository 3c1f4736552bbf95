// 3rd party crates
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IpDetectionError {
    #[error("Getting public IP failed with code {status}")]
    IpResolutionFailed { status: u16 },

    #[error("Network error from {service}: {error}")]
    Network {
        service: String,
        error: reqwest::Error,
    },

    #[error("Failed to read response body from {service}: {error}")]
    Body {
        service: String,
        error: reqwest::Error,
    },
}
