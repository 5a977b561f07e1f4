use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use lingo_server::api::routes::{create_router, AppState};
use lingo_server::translate::{self, Translator};
use lingo_server::tts::{self, SpeechService};

// Bounds every provider call; a hanging provider fails the request
// instead of holding it open.
const PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Configuration from environment
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .expect("PORT must be a number");
    let tts_base_url =
        std::env::var("TTS_BASE_URL").unwrap_or_else(|_| tts::DEFAULT_BASE_URL.to_string());
    let translate_base_url = std::env::var("TRANSLATE_BASE_URL")
        .unwrap_or_else(|_| translate::DEFAULT_BASE_URL.to_string());

    // Start server
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("Invalid address");

    tracing::info!("Lingo Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Starting server on http://{}", addr);
    tracing::info!("TTS provider: {}", tts_base_url);
    tracing::info!("Translation provider: {}", translate_base_url);

    // Shared HTTP client for both providers
    let client = reqwest::Client::builder()
        .timeout(PROVIDER_TIMEOUT)
        .build()
        .expect("Failed to create HTTP client");

    // Create app state
    let state = Arc::new(AppState {
        speech: SpeechService::new(client.clone(), tts_base_url),
        translator: Translator::new(client, translate_base_url),
    });

    // Create router
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app).await.expect("Server error");
}
