use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::{ApiStatus, ApiStatusResponse};

pub const INVALID_FORM_DATA: &str =
    "Invalid form data provided. Please check required fields and email format.";
pub const INTERNAL_SERVER_ERROR: &str = "Failed due to internal server error";

/// Log the full error chain and answer with a generic 500. The cause never reaches the client.
pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    error(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
}

pub fn error(code: StatusCode, message: &'static str) -> Response {
    (
        code,
        Json(ApiStatusResponse {
            status: ApiStatus::Error,
            message,
        }),
    )
        .into_response()
}
