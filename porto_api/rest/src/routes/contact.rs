use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use porto_core_contact_contracts::ContactService;
use porto_models::contact::ContactForm;
use tracing::{debug, info};

use crate::{
    errors::{error, internal_server_error, INVALID_FORM_DATA},
    models::{contact::ApiContactForm, ApiStatus, ApiStatusResponse},
};

pub fn router(service: Arc<impl ContactService>) -> Router<()> {
    Router::new()
        .route("/contact", routing::post(send_message))
        .with_state(service)
}

// The body is parsed as json whatever the Content-Type header says.
async fn send_message(service: State<Arc<impl ContactService>>, body: Bytes) -> Response {
    let form = match serde_json::from_slice::<ApiContactForm>(&body) {
        Ok(form) => form,
        Err(err) => {
            debug!("failed to parse contact form: {err}");
            return error(StatusCode::BAD_REQUEST, INVALID_FORM_DATA);
        }
    };

    let submission = match ContactForm::from(form).validate() {
        Ok(submission) => submission,
        Err(err) => {
            debug!("rejected contact form: {err}");
            return error(StatusCode::BAD_REQUEST, INVALID_FORM_DATA);
        }
    };

    let sender = submission.email.clone();
    match service.send_message(submission).await {
        Ok(()) => {
            info!(%sender, "contact form processed");
            Json(ApiStatusResponse {
                status: ApiStatus::Success,
                message: "message received succesfully",
            })
            .into_response()
        }
        Err(err) => internal_server_error(err),
    }
}
