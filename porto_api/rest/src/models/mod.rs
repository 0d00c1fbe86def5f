use serde::Serialize;

pub mod contact;

#[derive(Debug, Serialize)]
pub struct ApiStatusResponse {
    pub status: ApiStatus,
    pub message: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Success,
    Error,
}
