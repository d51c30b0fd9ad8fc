use axum::response::Response;
use axum::Json;
use serde::Deserialize;

use super::download;
use crate::errors::AppError;
use crate::models::MessageTemplate;
use crate::services::export::{client_messages_csv, CLIENT_MESSAGES_FILE};
use crate::services::fallback::fallback_templates;
use crate::services::renderer::{parse_client_csv, render};

#[derive(Deserialize)]
pub struct ClientMessagesRequest {
    pub csv: String,
    pub confirm_template: Option<String>,
    pub reminder_template: Option<String>,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub brand: String,
}

fn provided(template: Option<String>) -> Option<MessageTemplate> {
    template
        .filter(|t| !t.trim().is_empty())
        .map(MessageTemplate::from)
}

// POST /api/client-messages
pub async fn client_messages(
    Json(body): Json<ClientMessagesRequest>,
) -> Result<Response, AppError> {
    let records = parse_client_csv(body.csv.as_bytes()).map_err(AppError::ClientTable)?;

    let templates = (
        provided(body.confirm_template),
        provided(body.reminder_template),
    );
    let (confirm, reminder) = match templates {
        (Some(confirm), Some(reminder)) => (confirm, reminder),
        (confirm, reminder) => {
            let service = body.service.trim();
            let brand = body.brand.trim();
            if service.is_empty() || brand.is_empty() {
                return Err(AppError::BadRequest(
                    "service and brand are required when a template is missing".to_string(),
                ));
            }
            let defaults = fallback_templates(service, brand);
            (
                confirm.unwrap_or(defaults.confirm),
                reminder.unwrap_or(defaults.reminder),
            )
        }
    };

    let messages = render(&records, &confirm, &reminder);
    tracing::info!(rows = messages.len(), "client messages rendered");

    let csv = client_messages_csv(&messages)?;
    Ok(download(CLIENT_MESSAGES_FILE, "text/csv; charset=utf-8", csv))
}
