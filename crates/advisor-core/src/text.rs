//! Text helpers shared by the welcome message and the response templates.

/// Marker appended to truncated excerpts.
pub const ELLIPSIS: &str = "...";

/// Cut `text` to at most `max_chars` characters, appending [`ELLIPSIS`]
/// when anything was dropped. Counts chars, never splits a code point.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}{ELLIPSIS}", &text[..byte_idx]),
        None => text.to_string(),
    }
}

/// First `count` whitespace-separated words of `text`, joined by single spaces.
pub fn leading_words(text: &str, count: usize) -> String {
    text.split_whitespace()
        .take(count)
        .collect::<Vec<_>>()
        .join(" ")
}
