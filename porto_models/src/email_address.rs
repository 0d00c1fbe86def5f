use std::str::FromStr;

use lettre::{address::AddressError, message::Mailbox};

/// A syntactically valid email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(pub lettre::Address);

impl EmailAddress {
    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }

    /// Mailbox without a display name, as used in `From`, `To` and `Reply-To` headers.
    pub fn into_mailbox(self) -> Mailbox {
        Mailbox::new(None, self.0)
    }
}

impl FromStr for EmailAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = AddressError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        for (input, valid) in [
            ("akaBeex@example.com", true),
            ("jane.doe+contact@mail.example.org", true),
            ("", false),
            ("not-an-email", false),
            ("@example.com", false),
            ("jane@", false),
            ("jane doe@example.com", false),
        ] {
            assert_eq!(input.parse::<EmailAddress>().is_ok(), valid, "{input:?}");
        }
    }

    #[test]
    fn display() {
        let address: EmailAddress = "akaBeex@example.com".parse().unwrap();
        assert_eq!(address.to_string(), "akaBeex@example.com");
        assert_eq!(address.into_mailbox().to_string(), "akaBeex@example.com");
    }
}
