use porto_models::contact::ContactForm;
use serde::Deserialize;

/// Unvalidated contact form. Every field is optional here so that missing values are
/// reported by [`ContactForm::validate`] instead of the json parser.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiContactForm {
    /// First name of the sender
    pub first_name: Option<String>,
    /// Last name of the sender
    pub last_name: Option<String>,
    /// Email address of the sender
    pub email: Option<String>,
    /// Phone number of the sender, free format
    pub phone: Option<String>,
    /// Content of the message
    pub message: Option<String>,
}

impl From<ApiContactForm> for ContactForm {
    fn from(value: ApiContactForm) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            phone: value.phone,
            message: value.message,
        }
    }
}
