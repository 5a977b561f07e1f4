use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Speech synthesis failed: {0}")]
    TtsError(String),

    #[error("Translation failed: {0}")]
    TranslationError(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone(), None)
            }
            AppError::TtsError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "TTS_ERROR",
                "Failed to convert text to audio".to_string(),
                Some(msg.clone()),
            ),
            AppError::TranslationError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "TRANSLATION_ERROR",
                "Failed to translate text".to_string(),
                Some(msg.clone()),
            ),
        };

        tracing::error!("Request failed: {} - {}", code, self);

        (
            status,
            Json(ErrorResponse {
                error: message,
                code: code.to_string(),
                details,
            }),
        )
            .into_response()
    }
}
