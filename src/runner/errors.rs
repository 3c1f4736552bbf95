// 3rd party crates
use thiserror::Error;

// Project imports
use crate::providers::errors::ProviderError;
use crate::settings::errors::SettingsError;
use crate::utility::ip_detector::errors::IpDetectionError;

/// Failures that end a run at hard-failure severity.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    IpDetection(#[from] IpDetectionError),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}
