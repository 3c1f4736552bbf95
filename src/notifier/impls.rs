// 3rd party crates
use async_trait::async_trait;
use chrono::Local;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

// Project imports
use crate::settings::types::Settings;

// Current module imports
use super::constants::{MAIL_SUBJECT, SENDER_NAME};
use super::errors::NotificationError;
use super::functions::warning_body;
use super::traits::Notifier;
use super::types::SmtpNotifier;

impl SmtpNotifier {
    /// `None` when configuration never loaded; sends then fail.
    pub fn new(settings: Option<Settings>) -> Self {
        Self { settings }
    }

    /// Builds the warning mail from the configured sender to the receiver.
    pub fn compose(&self, outcome_text: &str) -> Result<Message, NotificationError> {
        let settings: &Settings = self
            .settings
            .as_ref()
            .ok_or(NotificationError::MissingSettings)?;

        let from: Address = settings.smtp_user()?.parse()?;
        let to: Address = settings.warning_receiver()?.parse()?;

        let message: Message = Message::builder()
            .from(Mailbox::new(Some(SENDER_NAME.to_string()), from))
            .to(Mailbox::new(None, to))
            .subject(MAIL_SUBJECT)
            .header(ContentType::TEXT_PLAIN)
            .body(warning_body(outcome_text, Local::now()))?;

        Ok(message)
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send_warning(&self, outcome_text: &str) -> Result<(), NotificationError> {
        let message: Message = self.compose(outcome_text)?;
        let settings: &Settings = self
            .settings
            .as_ref()
            .ok_or(NotificationError::MissingSettings)?;

        let server: &str = settings.smtp_server()?;
        let port: u16 = settings.smtp_port()?;
        let credentials = Credentials::new(
            settings.smtp_user()?.to_string(),
            settings.smtp_password()?.to_string(),
        );

        // `relay` wraps the session in TLS from the first byte.
        let mailer: AsyncSmtpTransport<Tokio1Executor> =
            AsyncSmtpTransport::<Tokio1Executor>::relay(server)?
                .port(port)
                .credentials(credentials)
                .build();

        debug!(server = %server, port = port, "Sending warning mail");
        mailer.send(message).await?;

        Ok(())
    }
}
