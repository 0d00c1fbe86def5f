//! Process configuration, read once from the environment at startup.

use std::{
    fmt::Display,
    net::{IpAddr, Ipv4Addr},
    str::FromStr,
};

use anyhow::{ensure, Context};
use config::Environment;
use porto_models::{email_address::EmailAddress, Sensitive};
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

pub use duration::Duration;

mod duration;

const DEFAULT_HTTP_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_HTTP_PORT: u16 = 8080;
const DEFAULT_SMTP_PORT: u16 = 465;
const DEFAULT_SMTP_TIMEOUT: &str = "10s";

/// Load the configuration from the process environment.
///
/// Variables from a `.env` file in the working directory are added first; variables that
/// are already set in the environment take precedence.
pub fn load() -> anyhow::Result<Config> {
    match dotenvy::dotenv() {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(err) if err.not_found() => {
            info!("No .env file found, relying on the process environment")
        }
        Err(err) => warn!("Failed to load .env file, relying on the process environment: {err}"),
    }

    load_from(Environment::default())
}

/// Load the configuration from the given environment source.
pub fn load_from(environment: Environment) -> anyhow::Result<Config> {
    config::Config::builder()
        .add_source(environment)
        .build()?
        .try_deserialize::<RawEnvironment>()
        .context("Failed to read environment")?
        .resolve()
}

#[derive(Debug, Clone)]
pub struct Config {
    pub http: HttpConfig,
    pub smtp: SmtpConfig,
    pub contact: ContactConfig,
}

#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: Sensitive<String>,
    pub from: EmailAddress,
    pub tls: SmtpTls,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct ContactConfig {
    pub recipient: EmailAddress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmtpTls {
    Wrapper,
    StartTls,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid tls mode `{0}`, expected one of `wrapper`, `starttls` or `none`")]
pub struct ParseSmtpTlsError(String);

impl FromStr for SmtpTls {
    type Err = ParseSmtpTlsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wrapper" | "tls" | "ssl" => Ok(Self::Wrapper),
            "starttls" => Ok(Self::StartTls),
            "none" => Ok(Self::None),
            _ => Err(ParseSmtpTlsError(s.into())),
        }
    }
}

/// Environment variables exactly as found, keys lowercased by the `config` crate.
#[derive(Debug, Default, Deserialize)]
struct RawEnvironment {
    smtp_host: Option<String>,
    smtp_port: Option<String>,
    smtp_username: Option<String>,
    smtp_pass: Option<String>,
    smtp_from: Option<String>,
    smtp_tls: Option<String>,
    smtp_timeout: Option<String>,
    recipient_email: Option<String>,
    http_host: Option<String>,
    port: Option<String>,
}

impl RawEnvironment {
    fn resolve(self) -> anyhow::Result<Config> {
        let mut missing = Vec::new();
        let smtp_host = required("SMTP_HOST", self.smtp_host, &mut missing);
        let smtp_username = required("SMTP_USERNAME", self.smtp_username, &mut missing);
        let smtp_pass = required("SMTP_PASS", self.smtp_pass, &mut missing);
        let recipient_email = required("RECIPIENT_EMAIL", self.recipient_email, &mut missing);
        ensure!(
            missing.is_empty(),
            "Missing required environment variables: {}. Set them in .env or in the system \
             environment.",
            missing.join(", ")
        );

        let smtp_port = with_default("SMTP_PORT", self.smtp_port, DEFAULT_SMTP_PORT)?;
        let smtp_from = match non_empty(self.smtp_from) {
            Some(from) => from,
            None => {
                warn!("SMTP_FROM not set, using SMTP_USERNAME: {smtp_username}");
                smtp_username.clone()
            }
        };
        let smtp_tls = match non_empty(self.smtp_tls) {
            Some(tls) => parse("SMTP_TLS", &tls)?,
            None if smtp_port == DEFAULT_SMTP_PORT => SmtpTls::Wrapper,
            None => SmtpTls::StartTls,
        };
        let smtp_timeout: Duration = parse(
            "SMTP_TIMEOUT",
            &non_empty(self.smtp_timeout).unwrap_or_else(|| DEFAULT_SMTP_TIMEOUT.into()),
        )?;
        ensure!(
            !smtp_timeout.is_zero(),
            "SMTP_TIMEOUT must be greater than zero"
        );

        Ok(Config {
            http: HttpConfig {
                host: with_default("HTTP_HOST", self.http_host, DEFAULT_HTTP_HOST)?,
                port: with_default("PORT", self.port, DEFAULT_HTTP_PORT)?,
            },
            smtp: SmtpConfig {
                host: smtp_host,
                port: smtp_port,
                username: smtp_username,
                password: smtp_pass.into(),
                from: parse("SMTP_FROM", &smtp_from)?,
                tls: smtp_tls,
                timeout: smtp_timeout,
            },
            contact: ContactConfig {
                recipient: parse("RECIPIENT_EMAIL", &recipient_email)?,
            },
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

fn required(name: &'static str, value: Option<String>, missing: &mut Vec<&'static str>) -> String {
    non_empty(value).unwrap_or_else(|| {
        missing.push(name);
        String::new()
    })
}

fn with_default<T>(name: &str, value: Option<String>, default: T) -> anyhow::Result<T>
where
    T: FromStr + Display,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match non_empty(value) {
        Some(value) => parse(name, &value),
        None => {
            warn!("{name} not set, using default: {default}");
            Ok(default)
        }
    }
}

fn parse<T>(name: &str, value: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .trim()
        .parse()
        .with_context(|| format!("Invalid value for {name}: {value:?}"))
}

#[cfg(test)]
mod tests {
    use config::Map;
    use pretty_assertions::assert_eq;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars = vars
            .iter()
            .map(|&(k, v)| (k.into(), v.into()))
            .collect::<Map<String, String>>();
        load_from(Environment::default().source(Some(vars)))
    }

    const REQUIRED: [(&str, &str); 4] = [
        ("SMTP_HOST", "smtp.example.com"),
        ("SMTP_USERNAME", "sender@example.com"),
        ("SMTP_PASS", "hunter2"),
        ("RECIPIENT_EMAIL", "contact@example.com"),
    ];

    #[test]
    fn defaults() {
        let config = load(&REQUIRED).unwrap();

        assert_eq!(config.http.host, DEFAULT_HTTP_HOST);
        assert_eq!(config.http.port, 8080);
        assert_eq!(config.smtp.host, "smtp.example.com");
        assert_eq!(config.smtp.port, 465);
        assert_eq!(config.smtp.username, "sender@example.com");
        assert_eq!(config.smtp.password.as_str(), "hunter2");
        assert_eq!(config.smtp.from.as_str(), "sender@example.com");
        assert_eq!(config.smtp.tls, SmtpTls::Wrapper);
        assert_eq!(*config.smtp.timeout, std::time::Duration::from_secs(10));
        assert_eq!(config.contact.recipient.as_str(), "contact@example.com");
    }

    #[test]
    fn overrides() {
        let mut vars = REQUIRED.to_vec();
        vars.extend([
            ("SMTP_PORT", "587"),
            ("SMTP_FROM", "noreply@example.com"),
            ("SMTP_TIMEOUT", "30s"),
            ("HTTP_HOST", "127.0.0.1"),
            ("PORT", "3000"),
        ]);

        let config = load(&vars).unwrap();

        assert_eq!(config.http.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(config.http.port, 3000);
        assert_eq!(config.smtp.port, 587);
        assert_eq!(config.smtp.from.as_str(), "noreply@example.com");
        assert_eq!(config.smtp.tls, SmtpTls::StartTls);
        assert_eq!(*config.smtp.timeout, std::time::Duration::from_secs(30));
    }

    #[test]
    fn ignores_shell_host() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("HOST", "myhost"));

        let config = load(&vars).unwrap();

        assert_eq!(config.http.host, DEFAULT_HTTP_HOST);
    }

    #[test]
    fn explicit_tls_mode() {
        let mut vars = REQUIRED.to_vec();
        vars.extend([("SMTP_PORT", "1025"), ("SMTP_TLS", "none")]);

        let config = load(&vars).unwrap();

        assert_eq!(config.smtp.tls, SmtpTls::None);
    }

    #[test]
    fn missing_required() {
        let err = load(&[("SMTP_HOST", "smtp.example.com"), ("SMTP_PASS", "")]).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Missing required environment variables: SMTP_USERNAME, SMTP_PASS, \
             RECIPIENT_EMAIL. Set them in .env or in the system environment."
        );
    }

    #[test]
    fn invalid_values() {
        for (name, value) in [
            ("SMTP_PORT", "smtp"),
            ("PORT", "99999"),
            ("HTTP_HOST", "localhost:80"),
            ("SMTP_FROM", "not an address"),
            ("RECIPIENT_EMAIL", "contact"),
            ("SMTP_TLS", "maybe"),
            ("SMTP_TIMEOUT", "soon"),
            ("SMTP_TIMEOUT", "0s"),
        ] {
            let mut vars = REQUIRED.to_vec();
            vars.push((name, value));

            assert!(load(&vars).is_err(), "{name}={value}");
        }
    }

    #[test]
    fn password_is_redacted() {
        let config = load(&REQUIRED).unwrap();

        assert!(!format!("{config:?}").contains("hunter2"));
    }
}
