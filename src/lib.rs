pub mod api;
pub mod error;
pub mod text;
pub mod translate;
pub mod tts;
