// 3rd party crates
use async_trait::async_trait;

// Current module imports
use super::errors::ProviderError;
use super::types::{BulkUpdateResponse, UpdateRecord};

/// A DNS provider that accepts many record updates in a single request.
///
/// Implementors issue exactly one request per call. Any transport failure or
/// non-200 status is an error; records the provider rejected individually
/// are reported through [`BulkUpdateResponse::failed_records`] instead.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Submits all update records in one bulk request.
    async fn bulk_update(
        &self,
        records: &[UpdateRecord],
    ) -> Result<BulkUpdateResponse, ProviderError>;

    /// Gets the provider's name.
    fn get_name(&self) -> &str;
}
