use crate::error::AppError;

/// Public host of the Google Translate TTS endpoint.
pub const DEFAULT_BASE_URL: &str = "https://translate.google.com";

/// Adapter around the `translate_tts` speech endpoint.
pub struct SpeechService {
    client: reqwest::Client,
    base_url: String,
}

impl SpeechService {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Synthesize `text` in `language` and return the MP3 bytes.
    ///
    /// The full audio body is buffered in memory before returning. Input
    /// must already be truncated to the provider's per-request limit. The
    /// `tw-ob` client parameter selects the unauthenticated web endpoint,
    /// which speaks at normal (non-slowed) rate.
    pub async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>, AppError> {
        let url = format!("{}/translate_tts", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", language),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| AppError::TtsError(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::TtsError(format!(
                "provider returned {}",
                response.status()
            )));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| AppError::TtsError(format!("failed to read audio body: {}", e)))?;

        if audio.is_empty() {
            return Err(AppError::TtsError(
                "provider returned empty audio".to_string(),
            ));
        }

        tracing::debug!(
            "Synthesized {} bytes of audio (lang={})",
            audio.len(),
            language
        );

        Ok(audio.to_vec())
    }
}
