//! Allow the contact form to be submitted from any origin

use std::time::Duration;

use axum::{
    http::{header, Method},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

const MAX_AGE: Duration = Duration::from_secs(12 * 60 * 60);

pub fn add<S: Clone + Send + Sync + 'static>(router: Router<S>) -> Router<S> {
    router.layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::PATCH,
                Method::DELETE,
                Method::HEAD,
                Method::OPTIONS,
            ])
            .allow_headers([header::ORIGIN, header::CONTENT_LENGTH, header::CONTENT_TYPE])
            .max_age(MAX_AGE),
    )
}
