// 3rd party crates
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use tracing::error;

// Project imports
use crate::providers::errors::ProviderError;

// Current module imports
use super::constants::{AUTH_HEADER, BULK_RECORDS_PATH};

/// Creates a reqwest client with the appropriate headers for the Hetzner API.
pub(super) fn create_reqwest_client(api_key: &str) -> Result<Client, ProviderError> {
    let mut headers: HeaderMap = HeaderMap::new();

    // Mark security-sensitive headers with `set_sensitive`.
    let mut auth_value: HeaderValue = HeaderValue::from_str(api_key).map_err(|e| {
        error!("Invalid API token format: {}", e);
        ProviderError::InvalidHeaderValue(e)
    })?;
    auth_value.set_sensitive(true);
    headers.insert(HeaderName::from_static(AUTH_HEADER), auth_value);
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );

    Client::builder()
        .default_headers(headers)
        .build()
        .map_err(|e| {
            error!("Failed to build HTTP client: {}", e);
            ProviderError::HttpClientBuild(e)
        })
}

/// Joins the API base URL and the bulk endpoint path.
pub(super) fn bulk_records_url(api_base_url: &str) -> String {
    format!("{}/{}", api_base_url.trim_end_matches('/'), BULK_RECORDS_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bulk_url_tolerates_trailing_slash() {
        assert_eq!(
            bulk_records_url("https://dns.hetzner.com/api/v1/"),
            "https://dns.hetzner.com/api/v1/records/bulk"
        );
        assert_eq!(
            bulk_records_url("https://dns.hetzner.com/api/v1"),
            "https://dns.hetzner.com/api/v1/records/bulk"
        );
    }

    #[test]
    fn rejects_token_with_control_characters() {
        let err = create_reqwest_client("token\nwith-newline").unwrap_err();
        assert!(matches!(err, ProviderError::InvalidHeaderValue(_)));
    }

    #[test]
    fn accepts_plain_token() {
        assert!(create_reqwest_client("abcDEF123").is_ok());
    }
}
