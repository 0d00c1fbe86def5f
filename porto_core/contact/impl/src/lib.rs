use std::sync::Arc;

use porto_core_contact_contracts::{ContactSendMessageError, ContactService};
use porto_email_contracts::{Email, EmailService};
use porto_models::{contact::ContactSubmission, email_address::EmailAddress};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ContactServiceImpl<Email> {
    email: Email,
    config: ContactServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ContactServiceConfig {
    /// Fixed address all contact form messages are delivered to
    pub recipient: Arc<EmailAddress>,
}

impl<EmailS> ContactServiceImpl<EmailS> {
    pub fn new(email: EmailS, config: ContactServiceConfig) -> Self {
        Self { email, config }
    }
}

impl<EmailS> ContactService for ContactServiceImpl<EmailS>
where
    EmailS: EmailService,
{
    async fn send_message(
        &self,
        submission: ContactSubmission,
    ) -> Result<(), ContactSendMessageError> {
        let email = Email {
            recipient: (*self.config.recipient).clone(),
            subject: subject(&submission),
            body: body(&submission),
            reply_to: Some(submission.email),
        };

        debug!(recipient = %email.recipient, "relaying contact form message");
        self.email.send(email).await?;

        Ok(())
    }
}

fn subject(submission: &ContactSubmission) -> String {
    format!(
        "Contact Form: {} {}",
        submission.first_name, submission.last_name
    )
}

fn body(submission: &ContactSubmission) -> String {
    let phone = submission.phone.as_ref().map_or("-", |phone| phone.as_str());
    [
        format!("Name: {} {}", submission.first_name, submission.last_name),
        format!("Email: {}", submission.email),
        format!("Phone: {phone}"),
        format!("Message: {}", submission.message),
    ]
    .join("\n")
}
