//! Plain-text derivation from sanitized HTML.
//!
//! The plain-text view always derives from cleaned markup, never from raw
//! input, so it inherits the guarantees of the sanitization stages.
//!
//! License: MIT OR Apache-2.0

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TAG_PATTERN: Regex = Regex::new(r"<[^>]*>").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
    static ref TRAILING_WORD: Regex = Regex::new(r"\w+$").unwrap();
}

/// The fixed entity decode set. Ampersand decodes last so that an
/// author-encoded sequence like `&amp;lt;` decodes exactly once.
const ENTITY_DECODE_TABLE: [(&str, &str); 6] = [
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&amp;", "&"),
];

/// Derives the plain-text view of already-sanitized HTML: tags removed,
/// the fixed entity set decoded, whitespace collapsed, ends trimmed.
pub fn extract_plain_text(cleaned_html: &str) -> String {
    if cleaned_html.is_empty() {
        return String::new();
    }
    let mut text = TAG_PATTERN.replace_all(cleaned_html, "").into_owned();
    for (entity, replacement) in ENTITY_DECODE_TABLE {
        if text.contains(entity) {
            text = text.replace(entity, replacement);
        }
    }
    WHITESPACE_RUN.replace_all(&text, " ").trim().to_string()
}

/// Truncates plain text to at most `max_length` characters.
///
/// The cut is a hard cut at `max_length` `char`s; the trailing run of word
/// characters is then deleted and `...` appended. The deletion does not
/// search backward for a space, so a cut landing at the end of a word
/// still drops that word, and a single over-long word truncates to `...`.
pub fn truncate_plain(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_length).collect();
    let cut = TRAILING_WORD.replace(&cut, "");
    format!("{}...", cut.trim_end())
}
