use std::future::Future;

use porto_email_contracts::EmailSendError;
use porto_models::contact::ContactSubmission;
use thiserror::Error;

pub trait ContactService: Send + Sync + 'static {
    /// Relay a validated contact form submission to the configured recipient.
    fn send_message(
        &self,
        submission: ContactSubmission,
    ) -> impl Future<Output = Result<(), ContactSendMessageError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSendMessageError {
    #[error("Failed to send message.")]
    Send(#[from] EmailSendError),
}
