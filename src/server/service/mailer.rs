//! Outgoing email.

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::server::{config::SmtpConfig, error::AppError};

/// A plain text email.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub text: String,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    /// Delivers a message.
    ///
    /// # Returns
    /// - `Ok(())` - Message accepted for delivery
    /// - `Err(AppError::EmailErr)` - Message could not be built or sent
    async fn send(&self, message: EmailMessage) -> Result<(), AppError>;
}

/// Sends mail through an SMTP relay using STARTTLS.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Builds the relay transport.
    ///
    /// # Arguments
    /// - `smtp` - Relay host, port and credentials
    /// - `from_name` - Display name of the sender
    /// - `from_email` - Sender address
    ///
    /// # Returns
    /// - `Ok(SmtpMailer)` - Mailer ready to send; no connection is opened yet
    /// - `Err(AppError::EmailErr)` - Invalid relay host or sender address
    pub fn new(smtp: &SmtpConfig, from_name: &str, from_email: &str) -> Result<Self, AppError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp.host)?
            .port(smtp.port)
            .credentials(Credentials::new(
                smtp.username.clone(),
                smtp.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            from: Mailbox::new(Some(from_name.to_string()), from_email.parse()?),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, message: EmailMessage) -> Result<(), AppError> {
        let email = Message::builder()
            .from(self.from.clone())
            .to(message.to.parse()?)
            .subject(message.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(message.text)?;

        let response = self.transport.send(email).await?;
        tracing::info!("Email sent to {}: {}", message.to, response.code());

        Ok(())
    }
}

/// Logs messages instead of sending them, used when no SMTP relay is configured.
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, message: EmailMessage) -> Result<(), AppError> {
        tracing::info!(
            to = %message.to,
            subject = %message.subject,
            "SMTP not configured, email not sent:\n{}",
            message.text
        );
        Ok(())
    }
}

/// Records sent messages in memory, for tests.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryMailer {
    pub sent: std::sync::Mutex<Vec<EmailMessage>>,
}

#[cfg(test)]
#[async_trait]
impl Mailer for MemoryMailer {
    async fn send(&self, message: EmailMessage) -> Result<(), AppError> {
        self.sent.lock().unwrap().push(message);
        Ok(())
    }
}

/// Fails every delivery, for tests.
#[cfg(test)]
pub struct FailingMailer;

#[cfg(test)]
#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _message: EmailMessage) -> Result<(), AppError> {
        Err(AppError::EmailErr("connection refused".to_string()))
    }
}
