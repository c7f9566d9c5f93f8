//! Post-processing that keeps generated questions within the five-word limit.
//!
//! The chat model is instructed to stay under five words, but it is not
//! trusted to comply, so every generated question passes through
//! [`bound_to_five_words`] before synthesis.

const MAX_WORDS: usize = 5;

/// Question used when the generator returns no usable text. Five words or
/// fewer, so bounding leaves it untouched.
pub const FALLBACK_QUESTION: &str = "Hi! Your name?";

/// Trims `text` and truncates it to at most five whitespace-separated words.
///
/// Words beyond the limit are dropped silently. Pure and idempotent.
pub fn bound_to_five_words(text: &str) -> String {
    let trimmed = text.trim();
    let words: Vec<&str> = trimmed.split_whitespace().collect();
    if words.len() <= MAX_WORDS {
        trimmed.to_string()
    } else {
        words[..MAX_WORDS].join(" ")
    }
}
