pub mod google;

use crate::error::AppError;

/// Public host of the Google Translate web API.
pub const DEFAULT_BASE_URL: &str = "https://translate.googleapis.com";

/// Result of a single translation call.
#[derive(Debug, Clone)]
pub struct Translation {
    pub translated: String,
    /// Source language code detected by the provider.
    pub source_lang: String,
}

/// Adapter around the `translate_a/single` endpoint.
pub struct Translator {
    client: reqwest::Client,
    base_url: String,
}

impl Translator {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Translate `text` into the destination language `dest`.
    ///
    /// The source language is auto-detected by the provider and reported
    /// back in the result.
    pub async fn translate(&self, text: &str, dest: &str) -> Result<Translation, AppError> {
        let url = format!("{}/translate_a/single", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", dest),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| AppError::TranslationError(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::TranslationError(format!(
                "provider returned {}",
                response.status()
            )));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AppError::TranslationError(format!("invalid provider response: {}", e)))?;

        let translation = google::parse_payload(&payload).map_err(AppError::TranslationError)?;

        tracing::debug!(
            "Translated {} chars ({} -> {})",
            text.chars().count(),
            translation.source_lang,
            dest
        );

        Ok(translation)
    }
}
