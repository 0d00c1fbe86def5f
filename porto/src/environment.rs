//! Concrete service types and the mapping from process config to service config.

use std::sync::Arc;

use porto_config::{Config, SmtpConfig, SmtpTls};
use porto_core_contact_impl::{ContactServiceConfig, ContactServiceImpl};
use porto_email_impl::{EmailServiceConfig, EmailServiceImpl, SmtpTlsMode};

pub type Email = EmailServiceImpl;
pub type Contact = ContactServiceImpl<Email>;
pub type RestServer = porto_api_rest::RestServer<Contact>;

pub fn email_service_config(config: &SmtpConfig) -> EmailServiceConfig {
    EmailServiceConfig {
        host: config.host.clone(),
        port: config.port,
        username: config.username.clone(),
        password: config.password.clone(),
        from: config.from.clone(),
        tls: match config.tls {
            SmtpTls::Wrapper => SmtpTlsMode::Wrapper,
            SmtpTls::StartTls => SmtpTlsMode::StartTls,
            SmtpTls::None => SmtpTlsMode::None,
        },
        timeout: config.timeout.into(),
    }
}

pub fn contact_service_config(config: &Config) -> ContactServiceConfig {
    ContactServiceConfig {
        recipient: Arc::new(config.contact.recipient.clone()),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use porto_config::{ContactConfig, HttpConfig};
    use pretty_assertions::assert_eq;

    use super::*;

    fn config() -> Config {
        Config {
            http: HttpConfig {
                host: [127, 0, 0, 1].into(),
                port: 8080,
            },
            smtp: SmtpConfig {
                host: "smtp.example.com".into(),
                port: 587,
                username: "sender@example.com".into(),
                password: String::from("hunter2").into(),
                from: "noreply@example.com".parse().unwrap(),
                tls: SmtpTls::StartTls,
                timeout: "15s".parse().unwrap(),
            },
            contact: ContactConfig {
                recipient: "contact@example.com".parse().unwrap(),
            },
        }
    }

    #[test]
    fn email_config() {
        let config = email_service_config(&config().smtp);

        assert_eq!(config.host, "smtp.example.com");
        assert_eq!(config.port, 587);
        assert_eq!(config.username, "sender@example.com");
        assert_eq!(config.password.as_str(), "hunter2");
        assert_eq!(config.from.as_str(), "noreply@example.com");
        assert_eq!(config.tls, SmtpTlsMode::StartTls);
        assert_eq!(config.timeout, Duration::from_secs(15));
    }

    #[test]
    fn contact_config() {
        let config = contact_service_config(&config());

        assert_eq!(config.recipient.as_str(), "contact@example.com");
    }
}
