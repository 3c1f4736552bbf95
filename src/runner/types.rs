// Project imports
use crate::providers::traits::DnsProvider;
use crate::settings::types::Settings;
use crate::utility::ip_detector::traits::PublicIpSource;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The bulk request went through but the provider rejected some records.
    PartialFailure,
    /// Configuration, network or API failure.
    HardFailure,
}

/// Everything one run needs, built once and passed to each step.
pub struct RunContext {
    pub settings: Settings,
    pub ip_source: Box<dyn PublicIpSource>,
    /// `None` builds a Hetzner client from `settings` when the update is submitted.
    pub provider: Option<Box<dyn DnsProvider>>,
}
