// 3rd party crates
use async_trait::async_trait;

// Current module imports
use super::errors::NotificationError;

/// Delivers the alert sent when a run does not end cleanly.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends one warning naming how the run ended, e.g. "one or more errors".
    async fn send_warning(&self, outcome_text: &str) -> Result<(), NotificationError>;
}
