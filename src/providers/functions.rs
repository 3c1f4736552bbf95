// Current module imports
use super::types::{DnsRecord, UpdateRecord};

/// Builds one update record per configured record, in configured order.
pub fn build_update_records(records: &[DnsRecord], zone_id: &str, ip: &str) -> Vec<UpdateRecord> {
    records
        .iter()
        .map(|record| record.stamp(zone_id, ip))
        .collect()
}
