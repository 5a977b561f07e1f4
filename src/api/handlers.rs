use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use super::{HealthResponse, SpeechRequest, TranslationRequest, TranslationResponse};
use crate::api::routes::AppState;
use crate::error::AppError;
use crate::text;

pub async fn text_to_audio(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SpeechRequest>,
) -> Result<Response, AppError> {
    // Validate input
    if request.text.is_empty() {
        return Err(AppError::BadRequest("Text cannot be empty".into()));
    }

    // The provider rejects long queries, so cut before calling out
    let reduced = text::truncate(&request.text);

    let audio = state.speech.synthesize(reduced, &request.language).await?;

    // Return audio as a downloadable file
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "audio/mpeg"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"audio.mp3\"",
            ),
        ],
        audio,
    )
        .into_response())
}

pub async fn translate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TranslationRequest>,
) -> Result<Json<TranslationResponse>, AppError> {
    // Validate input
    if request.text.is_empty() {
        return Err(AppError::BadRequest("Text cannot be empty".into()));
    }

    if request.language.is_empty() {
        return Err(AppError::BadRequest(
            "Target language cannot be empty".into(),
        ));
    }

    let translation = state
        .translator
        .translate(&request.text, &request.language)
        .await?;

    Ok(Json(TranslationResponse {
        original: request.text,
        translated: translation.translated,
        source_lang: translation.source_lang,
        target_lang: request.language,
    }))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
