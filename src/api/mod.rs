pub mod handlers;
pub mod routes;

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SpeechRequest {
    pub text: String,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "en".to_string()
}

#[derive(Debug, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    /// Destination language code (e.g. "es").
    pub language: String,
}

#[derive(Debug, Serialize)]
pub struct TranslationResponse {
    pub original: String,
    pub translated: String,
    pub source_lang: String,
    pub target_lang: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
