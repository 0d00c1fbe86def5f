use std::time::Duration;

use anyhow::{anyhow, ensure, Context};
use lettre::{
    message::header::ContentType,
    transport::smtp::authentication::{Credentials, Mechanism},
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use porto_email_contracts::{Email, EmailSendError, EmailService};
use porto_models::{email_address::EmailAddress, Sensitive};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    from: EmailAddress,
    timeout: Duration,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

#[derive(Debug, Clone)]
pub struct EmailServiceConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: Sensitive<String>,
    pub from: EmailAddress,
    pub tls: SmtpTlsMode,
    pub timeout: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmtpTlsMode {
    /// TLS from the first byte (smtps, usually port 465)
    Wrapper,
    /// Plaintext connection upgraded with STARTTLS
    StartTls,
    /// No encryption at all
    None,
}

impl EmailServiceImpl {
    /// Build the smtp transport. No connection is opened until the first email is sent.
    ///
    /// The transport is not pooled, so every [`EmailService::send`] call runs its own
    /// session. `timeout` bounds each whole session, not only the connect.
    pub fn new(config: EmailServiceConfig) -> anyhow::Result<Self> {
        let builder = match config.tls {
            SmtpTlsMode::Wrapper => AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
                .context("Failed to set up implicit tls for smtp server")?,
            SmtpTlsMode::StartTls => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
                    .context("Failed to set up starttls for smtp server")?
            }
            SmtpTlsMode::None => {
                AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
            }
        };

        let transport = builder
            .port(config.port)
            .credentials(Credentials::new(
                config.username,
                config.password.into_inner(),
            ))
            .authentication(vec![Mechanism::Plain])
            .timeout(Some(config.timeout))
            .build();

        Ok(Self {
            from: config.from,
            timeout: config.timeout,
            transport,
        })
    }

    fn build_message(&self, email: Email) -> anyhow::Result<Message> {
        let mut builder = Message::builder()
            .from(self.from.clone().into_mailbox())
            .to(email.recipient.into_mailbox())
            .subject(email.subject)
            .header(ContentType::TEXT_PLAIN);

        if let Some(reply_to) = email.reply_to {
            builder = builder.reply_to(reply_to.into_mailbox());
        }

        builder.body(email.body).context("Failed to build email")
    }
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> Result<(), EmailSendError> {
        let recipient = email.recipient.clone();
        let message = self.build_message(email)?;

        debug!(%recipient, "submitting email to smtp server");
        let response = tokio::time::timeout(self.timeout, self.transport.send(message))
            .await
            .map_err(|_| anyhow!("smtp session timed out after {:?}", self.timeout))?
            .context("Failed to submit email to smtp server")?;

        if !response.is_positive() {
            return Err(anyhow!("smtp server rejected email with code {}", response.code()).into());
        }

        debug!(%recipient, "email accepted by smtp server");
        Ok(())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        let ok = tokio::time::timeout(self.timeout, self.transport.test_connection())
            .await
            .map_err(|_| anyhow!("smtp session timed out after {:?}", self.timeout))?
            .context("Failed to connect to smtp server")?;
        ensure!(ok, "smtp server did not accept the session");
        Ok(())
    }
}
