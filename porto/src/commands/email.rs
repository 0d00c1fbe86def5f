use anyhow::Context;
use clap::Subcommand;
use porto_config::Config;
use porto_email_contracts::{Email, EmailService};
use porto_models::email_address::EmailAddress;
use tracing::info;

use crate::email;

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Send a test email to check deliverability
    Test { recipient: EmailAddress },
    /// Check that the smtp server accepts the configured credentials
    Ping,
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            EmailCommand::Test { recipient } => test(config, recipient).await,
            EmailCommand::Ping => ping(config).await,
        }
    }
}

async fn test(config: Config, recipient: EmailAddress) -> anyhow::Result<()> {
    let email_service = email::connect(&config.smtp)?;

    email_service
        .send(Email {
            recipient: recipient.clone(),
            subject: "Email Deliverability Test".into(),
            body: "Email deliverability seems to be working!".into(),
            reply_to: None,
        })
        .await
        .context("Failed to send test email")?;

    info!("Test email sent to {recipient}");
    Ok(())
}

async fn ping(config: Config) -> anyhow::Result<()> {
    email::connect(&config.smtp)?.ping().await?;

    info!(
        "smtp server {}:{} accepted the session",
        config.smtp.host, config.smtp.port
    );
    Ok(())
}
