use porto_config::SmtpConfig;
use porto_email_impl::EmailServiceImpl;

use crate::environment;

/// Set up the smtp transport. The server itself is only contacted when an email is sent.
pub fn connect(config: &SmtpConfig) -> anyhow::Result<environment::Email> {
    EmailServiceImpl::new(environment::email_service_config(config))
}
