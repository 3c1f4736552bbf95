// 3rd party crates
use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

// Current module imports
use super::constants::IP_ECHO_URL;
use super::errors::IpDetectionError;
use super::traits::PublicIpSource;
use super::types::IpDetector;

impl Default for IpDetector {
    fn default() -> Self {
        Self::new(IP_ECHO_URL)
    }
}

impl IpDetector {
    pub fn new(service: &str) -> Self {
        Self {
            service: service.to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl PublicIpSource for IpDetector {
    async fn public_ip(&self) -> Result<String, IpDetectionError> {
        debug!(service = %self.service, "Querying IP echo service");

        let response = self
            .client
            .get(&self.service)
            .send()
            .await
            .map_err(|error| IpDetectionError::Network {
                service: self.service.clone(),
                error,
            })?;

        let status: StatusCode = response.status();
        if status != StatusCode::OK {
            return Err(IpDetectionError::IpResolutionFailed {
                status: status.as_u16(),
            });
        }

        let body: String = response
            .text()
            .await
            .map_err(|error| IpDetectionError::Body {
                service: self.service.clone(),
                error,
            })?;

        Ok(body.trim().to_string())
    }
}
