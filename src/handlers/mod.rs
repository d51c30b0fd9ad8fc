pub mod clients;
pub mod generate;
pub mod health;
pub mod page;

use std::sync::Arc;

use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(page::index_page))
        .route("/health", get(health::health))
        .route("/api/booking-prompts", post(generate::booking_prompts))
        .route("/api/templates", post(generate::status_templates))
        .route("/api/client-messages", post(clients::client_messages))
        .with_state(state)
}

/// Attachment response the browser saves under `filename`.
pub(crate) fn download(
    filename: &str,
    content_type: &'static str,
    body: impl Into<axum::body::Body>,
) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body.into(),
    )
        .into_response()
}
