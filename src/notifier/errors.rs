// 3rd party crates
use thiserror::Error;

// Project imports
use crate::settings::errors::SettingsError;

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("No configuration available to send mail with")]
    MissingSettings,

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("Invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Failed to build mail: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("SMTP error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}
