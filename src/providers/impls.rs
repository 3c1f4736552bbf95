// 3rd party crates
use serde_json::Value;

// Current module imports
use super::types::{DnsRecord, UpdateRecord};

impl DnsRecord {
    /// Stamps this record with the zone it belongs to and the new value.
    ///
    /// Configured `zone_id` / `value` keys are overwritten where they stand.
    pub fn stamp(&self, zone_id: &str, value: &str) -> UpdateRecord {
        let mut fields = self.fields.clone();
        fields.insert("zone_id".to_string(), Value::from(zone_id));
        fields.insert("value".to_string(), Value::from(value));

        UpdateRecord {
            name: self.name.clone(),
            record_type: self.record_type.clone(),
            fields,
        }
    }
}

impl UpdateRecord {
    pub fn zone_id(&self) -> Option<&str> {
        self.fields.get("zone_id").and_then(Value::as_str)
    }

    pub fn value(&self) -> Option<&str> {
        self.fields.get("value").and_then(Value::as_str)
    }
}
