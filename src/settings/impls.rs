// Standard library
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

// 3rd party crates
use serde_json::Value;
use tracing::info;

// Project imports
use crate::providers::types::DnsRecord;

// Current module imports
use super::errors::SettingsError;
use super::types::Settings;

fn require<'a, T>(value: &'a Option<T>, field: &'static str) -> Result<&'a T, SettingsError> {
    value.as_ref().ok_or(SettingsError::MissingField(field))
}

impl Settings {
    /// Loads the settings from a JSON configuration file.
    pub fn load(config_path: &Path) -> Result<Self, SettingsError> {
        if !config_path.exists() {
            return Err(SettingsError::ConfigMissing(config_path.to_path_buf()));
        }

        let file: File = File::open(config_path).map_err(|source| {
            SettingsError::ConfigUnreadable {
                path: config_path.to_path_buf(),
                source,
            }
        })?;
        let settings: Settings = serde_json::from_reader(BufReader::new(file))?;

        info!("Config file successfully parsed ✓");
        Ok(settings)
    }

    pub fn api_base_url(&self) -> Result<&str, SettingsError> {
        require(&self.api_base_url, "apiBaseUrl").map(String::as_str)
    }

    pub fn api_key(&self) -> Result<&str, SettingsError> {
        require(&self.api_key, "apiKey").map(String::as_str)
    }

    pub fn zone_id(&self) -> Result<&str, SettingsError> {
        require(&self.zone_id, "zoneId").map(String::as_str)
    }

    pub fn records(&self) -> Result<&[DnsRecord], SettingsError> {
        require(&self.records, "records").map(Vec::as_slice)
    }

    pub fn smtp_server(&self) -> Result<&str, SettingsError> {
        require(&self.smtp_server, "smtpServer").map(String::as_str)
    }

    /// The SMTP port, given either as a number or as a numeric string.
    pub fn smtp_port(&self) -> Result<u16, SettingsError> {
        let raw: &Value = require(&self.smtp_port, "smtpPort")?;
        let port: Option<u16> = match raw {
            Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        };

        port.ok_or_else(|| SettingsError::InvalidField {
            field: "smtpPort",
            value: raw.to_string(),
        })
    }

    pub fn smtp_user(&self) -> Result<&str, SettingsError> {
        require(&self.smtp_user, "smtpUser").map(String::as_str)
    }

    pub fn smtp_password(&self) -> Result<&str, SettingsError> {
        require(&self.smtp_password, "smtpPassword").map(String::as_str)
    }

    pub fn warning_receiver(&self) -> Result<&str, SettingsError> {
        require(&self.warning_receiver, "warningReceiver").map(String::as_str)
    }
}

// Keep secrets out of debug output.
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redacted = |secret: &Option<String>| secret.as_ref().map(|_| "<redacted>");

        f.debug_struct("Settings")
            .field("api_base_url", &self.api_base_url)
            .field("api_key", &redacted(&self.api_key))
            .field("zone_id", &self.zone_id)
            .field("records", &self.records)
            .field("smtp_server", &self.smtp_server)
            .field("smtp_port", &self.smtp_port)
            .field("smtp_user", &self.smtp_user)
            .field("smtp_password", &redacted(&self.smtp_password))
            .field("warning_receiver", &self.warning_receiver)
            .finish()
    }
}
