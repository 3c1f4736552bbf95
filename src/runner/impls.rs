// Project imports
use crate::providers::hetzner::types::Hetzner;
use crate::providers::traits::DnsProvider;
use crate::settings::types::Settings;
use crate::utility::ip_detector::traits::PublicIpSource;
use crate::utility::ip_detector::types::IpDetector;

// Current module imports
use super::errors::RunError;
use super::types::{Outcome, RunContext};

impl Outcome {
    /// Severity code: 0 success, 1 partial failure, 2 hard failure.
    pub fn severity(self) -> u8 {
        match self {
            Outcome::Success => 0,
            Outcome::PartialFailure => 1,
            Outcome::HardFailure => 2,
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Outcome::Success => "no errors",
            Outcome::PartialFailure => "one or more warnings",
            Outcome::HardFailure => "one or more errors",
        }
    }

    pub fn requires_notification(self) -> bool {
        self.severity() > 0
    }
}

impl RunContext {
    pub fn new(
        settings: Settings,
        ip_source: Box<dyn PublicIpSource>,
        provider: Box<dyn DnsProvider>,
    ) -> Self {
        Self {
            settings,
            ip_source,
            provider: Some(provider),
        }
    }

    /// Uses the HTTP IP detector; the Hetzner client is built on first use.
    pub fn from_settings(settings: Settings) -> Self {
        Self {
            settings,
            ip_source: Box::new(IpDetector::default()),
            provider: None,
        }
    }

    /// Builds the Hetzner client from the API settings.
    pub fn hetzner(&self) -> Result<Hetzner, RunError> {
        Hetzner::new(self.settings.api_base_url()?, self.settings.api_key()?)
            .map_err(RunError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::errors::SettingsError;

    #[test]
    fn severity_codes() {
        assert_eq!(Outcome::Success.severity(), 0);
        assert_eq!(Outcome::PartialFailure.severity(), 1);
        assert_eq!(Outcome::HardFailure.severity(), 2);
    }

    #[test]
    fn only_failures_notify() {
        assert!(!Outcome::Success.requires_notification());
        assert!(Outcome::PartialFailure.requires_notification());
        assert!(Outcome::HardFailure.requires_notification());
    }

    #[test]
    fn from_settings_defers_provider() {
        let ctx = RunContext::from_settings(Settings::default());

        assert!(ctx.provider.is_none());
    }

    #[test]
    fn hetzner_needs_api_credentials() {
        let ctx = RunContext::from_settings(Settings {
            api_base_url: Some("https://dns.hetzner.com/api/v1".into()),
            ..Settings::default()
        });

        let err = ctx.hetzner().err().unwrap();

        assert!(matches!(
            err,
            RunError::Settings(SettingsError::MissingField("apiKey"))
        ));
    }

    #[test]
    fn hetzner_built_from_settings() {
        let ctx = RunContext::from_settings(Settings {
            api_base_url: Some("https://dns.hetzner.com/api/v1".into()),
            api_key: Some("token".into()),
            ..Settings::default()
        });

        let hetzner = ctx.hetzner().unwrap();

        assert_eq!(hetzner.get_name(), "hetzner");
        assert_eq!(hetzner.api_base_url, "https://dns.hetzner.com/api/v1");
    }
}
