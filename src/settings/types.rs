// 3rd party crates
use serde::Deserialize;
use serde_json::Value;

// Project imports
use crate::providers::types::DnsRecord;

/// Settings read from the JSON configuration file.
///
/// Fields are optional at parse time. Accessors in `impls.rs` turn an
/// absent field into [`super::errors::SettingsError::MissingField`] at the
/// point of first use.
#[derive(Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub api_base_url: Option<String>,
    pub api_key: Option<String>,
    pub zone_id: Option<String>,
    pub records: Option<Vec<DnsRecord>>,
    pub smtp_server: Option<String>,
    /// Kept raw so a malformed port only matters when mail is sent.
    pub smtp_port: Option<Value>,
    pub smtp_user: Option<String>,
    pub smtp_password: Option<String>,
    pub warning_receiver: Option<String>,
}
