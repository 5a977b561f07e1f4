/// Maximum number of characters sent to the speech provider per request.
pub const MAX_TTS_CHARS: usize = 150;

/// Truncate text to the first 150 characters.
///
/// Counts Unicode scalar values, not bytes, so multi-byte characters are
/// never split. Not word-aware: the cut can land mid-word.
pub fn truncate(text: &str) -> &str {
    match text.char_indices().nth(MAX_TTS_CHARS) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
