/// Name used in log fields for this provider.
pub const PROVIDER_NAME: &str = "hetzner";

/// Header carrying the API token (`Auth-API-Token`), lowercased for `HeaderName::from_static`.
pub const AUTH_HEADER: &str = "auth-api-token";

/// Path of the bulk update endpoint, relative to the API base URL.
pub const BULK_RECORDS_PATH: &str = "records/bulk";
