#![allow(dead_code)]

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

use hetzner_dyndns::notifier::errors::NotificationError;
use hetzner_dyndns::notifier::Notifier;
use hetzner_dyndns::providers::errors::ProviderError;
use hetzner_dyndns::providers::types::{BulkUpdateResponse, FailedRecord, UpdateRecord};
use hetzner_dyndns::providers::DnsProvider;
use hetzner_dyndns::runner::RunContext;
use hetzner_dyndns::settings::errors::SettingsError;
use hetzner_dyndns::settings::types::Settings;
use hetzner_dyndns::utility::ip_detector::errors::IpDetectionError;
use hetzner_dyndns::utility::ip_detector::traits::PublicIpSource;

/// Collects formatted log lines for the current thread.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn count(&self, needle: &str) -> usize {
        self.contents().lines().filter(|l| l.contains(needle)).count()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

pub fn capture_logs() -> (LogCapture, DefaultGuard) {
    let capture = LogCapture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_ansi(false)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (capture, guard)
}

/// IP source answering with a fixed address or a fixed HTTP status.
pub struct FixedIp(pub Result<&'static str, u16>);

#[async_trait]
impl PublicIpSource for FixedIp {
    async fn public_ip(&self) -> Result<String, IpDetectionError> {
        match self.0 {
            Ok(ip) => Ok(ip.to_string()),
            Err(status) => Err(IpDetectionError::IpResolutionFailed { status }),
        }
    }
}

#[derive(Clone)]
pub enum Reply {
    Accept,
    Reject(Vec<FailedRecord>),
    Status(u16, &'static str),
}

/// Provider that records every bulk payload it receives.
#[derive(Clone)]
pub struct RecordingProvider {
    pub calls: Arc<Mutex<Vec<Vec<UpdateRecord>>>>,
    pub reply: Reply,
}

impl RecordingProvider {
    pub fn new(reply: Reply) -> Self {
        Self {
            calls: Arc::default(),
            reply,
        }
    }

    pub fn calls(&self) -> Vec<Vec<UpdateRecord>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DnsProvider for RecordingProvider {
    async fn bulk_update(
        &self,
        records: &[UpdateRecord],
    ) -> Result<BulkUpdateResponse, ProviderError> {
        self.calls.lock().unwrap().push(records.to_vec());

        match &self.reply {
            Reply::Accept => Ok(BulkUpdateResponse::default()),
            Reply::Reject(failed) => Ok(BulkUpdateResponse {
                records: Vec::new(),
                failed_records: failed.clone(),
            }),
            Reply::Status(status, body) => Err(ProviderError::UpdateRequestFailed {
                status: *status,
                body: body.to_string(),
            }),
        }
    }

    fn get_name(&self) -> &str {
        "recording"
    }
}

/// Notifier counting attempts, optionally failing each one.
#[derive(Clone, Default)]
pub struct CountingNotifier {
    pub attempts: Arc<AtomicUsize>,
    pub fail: bool,
}

impl CountingNotifier {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Notifier for CountingNotifier {
    async fn send_warning(&self, _outcome_text: &str) -> Result<(), NotificationError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(NotificationError::Settings(SettingsError::MissingField(
                "smtpServer",
            )))
        } else {
            Ok(())
        }
    }
}

pub fn settings_with_records(names: &[&str]) -> Settings {
    let records: Vec<_> = names
        .iter()
        .map(|name| json!({ "name": name, "type": "A", "ttl": 86400 }))
        .collect();

    serde_json::from_value(json!({
        "apiBaseUrl": "https://dns.example.test/api/v1",
        "apiKey": "token",
        "zoneId": "zone-1",
        "records": records,
    }))
    .unwrap()
}

pub fn failed(id: &str, name: &str) -> FailedRecord {
    FailedRecord {
        id: id.to_string(),
        name: name.to_string(),
    }
}

pub fn context(settings: Settings, ip: FixedIp, provider: &RecordingProvider) -> RunContext {
    RunContext::new(settings, Box::new(ip), Box::new(provider.clone()))
}
