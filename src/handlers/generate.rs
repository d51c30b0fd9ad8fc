use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use super::download;
use crate::errors::AppError;
use crate::models::BookingInputs;
use crate::services::composer::{compose_booking, compose_templates};
use crate::services::export::{
    booking_prompts_txt, templates_txt, BOOKING_PROMPTS_FILE, TEMPLATES_FILE,
};
use crate::state::AppState;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

#[derive(Deserialize, Default)]
pub struct ExportQuery {
    #[serde(default)]
    pub download: bool,
}

fn validated(inputs: BookingInputs) -> Result<BookingInputs, AppError> {
    inputs
        .normalized()
        .ok_or_else(|| AppError::BadRequest("service and brand are required".to_string()))
}

// POST /api/booking-prompts
pub async fn booking_prompts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ExportQuery>,
    Json(inputs): Json<BookingInputs>,
) -> Result<Response, AppError> {
    let inputs = validated(inputs)?;
    let composed = compose_booking(state.generator.as_ref(), &inputs).await;

    tracing::info!(
        service = %inputs.service,
        source = ?composed.source,
        download = query.download,
        "booking prompts composed"
    );

    if query.download {
        return Ok(download(
            BOOKING_PROMPTS_FILE,
            TEXT_PLAIN,
            booking_prompts_txt(&composed.text),
        ));
    }
    Ok(Json(composed).into_response())
}

// POST /api/templates
pub async fn status_templates(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ExportQuery>,
    Json(inputs): Json<BookingInputs>,
) -> Result<Response, AppError> {
    let inputs = validated(inputs)?;
    let composed = compose_templates(state.generator.as_ref(), &inputs).await;

    tracing::info!(
        service = %inputs.service,
        source = ?composed.source,
        download = query.download,
        "status templates composed"
    );

    if query.download {
        return Ok(download(
            TEMPLATES_FILE,
            TEXT_PLAIN,
            templates_txt(&composed.templates),
        ));
    }
    Ok(Json(composed).into_response())
}
