// 3rd party crates
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A DNS record as it appears in the `records` array of the configuration.
///
/// Only `name` and `type` are interpreted; every other field is carried
/// through to the provider untouched and in its configured order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnsRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// A configured record stamped with the zone and the resolved public IP.
///
/// `zone_id` and `value` live in `fields`, in the position the configured
/// record gave them or appended after its other fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Body of the bulk update request.
#[derive(Debug, Serialize)]
pub struct BulkUpdateRequest<'a> {
    pub records: &'a [UpdateRecord],
}

/// Represents the response from a bulk update request.
#[derive(Debug, Default, Deserialize)]
pub struct BulkUpdateResponse {
    #[serde(default)]
    pub records: Vec<Value>,
    pub failed_records: Vec<FailedRecord>,
}

/// A record the provider refused to update.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FailedRecord {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Record ids are strings on the wire, but tolerate numeric ids as well.
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(id) => id,
        other => other.to_string(),
    })
}
