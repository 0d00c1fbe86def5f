use nutype::nutype;
use thiserror::Error;

use crate::email_address::EmailAddress;

/// A validated contact form submission, ready to be relayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub first_name: ContactFirstName,
    pub last_name: ContactLastName,
    pub email: EmailAddress,
    pub phone: Option<ContactPhone>,
    pub message: ContactMessage,
}

#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display)
)]
pub struct ContactFirstName(String);

#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display)
)]
pub struct ContactLastName(String);

#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display)
)]
pub struct ContactPhone(String);

#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display)
)]
pub struct ContactMessage(String);

/// Raw contact form payload as received from a client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactFormError {
    #[error("Required field `{0}` is missing.")]
    Missing(ContactFormField),
    #[error("Field `email` is not a valid email address.")]
    InvalidEmail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactFormField {
    FirstName,
    LastName,
    Email,
    Phone,
    Message,
}

impl ContactFormField {
    /// Name of the field in the json payload.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Message => "message",
        }
    }
}

impl std::fmt::Display for ContactFormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ContactForm {
    /// Checks the fields in payload order and reports the first violation.
    pub fn validate(self) -> Result<ContactSubmission, ContactFormError> {
        let first_name = required(
            ContactFormField::FirstName,
            self.first_name,
            ContactFirstName::try_new,
        )?;
        let last_name = required(
            ContactFormField::LastName,
            self.last_name,
            ContactLastName::try_new,
        )?;
        let email = required(ContactFormField::Email, self.email, Ok::<_, ()>)?
            .trim()
            .parse()
            .map_err(|_| ContactFormError::InvalidEmail)?;
        let phone = optional(ContactFormField::Phone, self.phone, ContactPhone::try_new)?;
        let message = required(
            ContactFormField::Message,
            self.message,
            ContactMessage::try_new,
        )?;

        Ok(ContactSubmission {
            first_name,
            last_name,
            email,
            phone,
            message,
        })
    }
}

fn required<T, E>(
    field: ContactFormField,
    value: Option<String>,
    new: impl FnOnce(String) -> Result<T, E>,
) -> Result<T, ContactFormError> {
    optional(field, value, new)?.ok_or(ContactFormError::Missing(field))
}

/// Blank values count as absent.
fn optional<T, E>(
    field: ContactFormField,
    value: Option<String>,
    new: impl FnOnce(String) -> Result<T, E>,
) -> Result<Option<T>, ContactFormError> {
    value
        .filter(|value| !value.trim().is_empty())
        .map(|value| new(value).map_err(|_| ContactFormError::Missing(field)))
        .transpose()
}
