use std::future::Future;

use porto_models::email_address::EmailAddress;
use thiserror::Error;

/// Relays a single plain text email through the configured mail transport.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait EmailService: Send + Sync + 'static {
    /// Send `email` to exactly one recipient.
    ///
    /// Each call uses its own smtp session and completes only once the server accepted
    /// the message or the session failed. Nothing is retried.
    fn send(&self, email: Email) -> impl Future<Output = Result<(), EmailSendError>> + Send;

    /// Check that the smtp server accepts a session with the configured credentials.
    fn ping(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub recipient: EmailAddress,
    pub subject: String,
    pub body: String,
    pub reply_to: Option<EmailAddress>,
}

/// Any transport, authentication or network failure while sending an email.
#[derive(Debug, Error)]
#[error("Failed to send email.")]
pub struct EmailSendError(#[from] pub anyhow::Error);

#[cfg(feature = "mock")]
impl MockEmailService {
    pub fn with_send(mut self, email: Email, ok: bool) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(move |_| {
                let result = match ok {
                    true => Ok(()),
                    false => Err(EmailSendError(anyhow::anyhow!("smtp server unavailable"))),
                };
                Box::pin(std::future::ready(result))
            });
        self
    }
}
