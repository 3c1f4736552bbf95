// 3rd party crates
use async_trait::async_trait;

// Current module imports
use super::errors::IpDetectionError;

/// Source of the machine's current public IP address.
#[async_trait]
pub trait PublicIpSource: Send + Sync {
    /// Returns the public IP as reported by the source, whitespace trimmed.
    async fn public_ip(&self) -> Result<String, IpDetectionError>;
}
