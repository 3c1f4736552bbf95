// 3rd party crates
use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, info};

// Project imports
use crate::providers::errors::ProviderError;
use crate::providers::traits::DnsProvider;
use crate::providers::types::{BulkUpdateRequest, BulkUpdateResponse, UpdateRecord};

// Current module imports
use super::constants::PROVIDER_NAME;
use super::functions::{bulk_records_url, create_reqwest_client};
use super::types::Hetzner;

impl Hetzner {
    /// Creates a new Hetzner DNS client for the given API base URL and token.
    pub fn new(api_base_url: &str, api_key: &str) -> Result<Self, ProviderError> {
        Ok(Self {
            api_base_url: api_base_url.to_string(),
            client: create_reqwest_client(api_key)?,
        })
    }
}

#[async_trait]
impl DnsProvider for Hetzner {
    async fn bulk_update(
        &self,
        records: &[UpdateRecord],
    ) -> Result<BulkUpdateResponse, ProviderError> {
        let url: String = bulk_records_url(&self.api_base_url);

        info!(
            provider = PROVIDER_NAME,
            count = records.len(),
            "Submitting bulk update"
        );
        debug!(provider = PROVIDER_NAME, url = %url, "Sending bulk update request");

        let response = self
            .client
            .put(&url)
            .json(&BulkUpdateRequest { records })
            .send()
            .await
            .map_err(ProviderError::Network)?;

        let status: StatusCode = response.status();
        let body: String = response.text().await.map_err(ProviderError::Network)?;

        debug!(
            provider = PROVIDER_NAME,
            status = status.as_u16(),
            response = %body,
            "Received bulk update response"
        );

        if status != StatusCode::OK {
            return Err(ProviderError::UpdateRequestFailed {
                status: status.as_u16(),
                body: body.trim_end().to_string(),
            });
        }

        serde_json::from_str(&body).map_err(|e| ProviderError::InvalidResponse {
            message: e.to_string(),
            body,
        })
    }

    fn get_name(&self) -> &str {
        PROVIDER_NAME
    }
}
