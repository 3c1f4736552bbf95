// Project imports
use crate::settings::types::Settings;

/// Sends warning mails over SMTP with implicit TLS.
///
/// Holds no connection; each send opens, uses and closes its own session.
#[derive(Debug, Clone)]
pub struct SmtpNotifier {
    pub settings: Option<Settings>,
}
