//! Presentation style resolution for processed content.
//!
//! Maps a semantic content role to the opaque style token consumed by the
//! rendering layer. The mapping is policy, not invariant: any consistent
//! assignment works as long as each role resolves to a distinct, stable
//! token.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use serde::{Deserialize, Serialize};

/// The semantic role of a piece of content.
///
/// Unrecognized names fall back to [`TextStyle::Paragraph`] rather than
/// erroring; the serde round-trip goes through `String` so that foreign
/// configuration with unknown style names still deserializes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TextStyle {
    #[default]
    Paragraph,
    Quote,
    Heading,
    Plain,
}

impl TextStyle {
    /// Parses a style name. Anything unrecognized resolves to `Paragraph`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "paragraph" => Self::Paragraph,
            "quote" => Self::Quote,
            "heading" => Self::Heading,
            "plain" => Self::Plain,
            other => {
                debug!("Unknown text style '{}'; using paragraph.", other);
                Self::Paragraph
            }
        }
    }

    /// The canonical lowercase name of this style.
    pub fn name(self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Quote => "quote",
            Self::Heading => "heading",
            Self::Plain => "plain",
        }
    }

    /// Resolves the presentation style token for this role.
    pub fn style_token(self) -> &'static str {
        match self {
            Self::Paragraph => "content-text--paragraph",
            Self::Quote => "content-text--quote",
            Self::Heading => "content-text--heading",
            Self::Plain => "content-text--plain",
        }
    }
}

impl From<String> for TextStyle {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<TextStyle> for String {
    fn from(style: TextStyle) -> Self {
        style.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tokens_are_distinct_and_stable() {
        let styles = [
            TextStyle::Paragraph,
            TextStyle::Quote,
            TextStyle::Heading,
            TextStyle::Plain,
        ];
        let tokens: HashSet<&str> = styles.iter().map(|s| s.style_token()).collect();
        assert_eq!(tokens.len(), styles.len());
        // Stable across calls.
        assert_eq!(TextStyle::Quote.style_token(), TextStyle::Quote.style_token());
    }

    #[test]
    fn test_unrecognized_name_falls_back_to_paragraph() {
        assert_eq!(TextStyle::from_name("banner"), TextStyle::Paragraph);
        assert_eq!(TextStyle::from_name(""), TextStyle::Paragraph);
        assert_eq!(TextStyle::from_name("  QUOTE  "), TextStyle::Quote);
    }

    #[test]
    fn test_serde_round_trip_with_fallback() {
        let style: TextStyle = serde_json::from_str("\"heading\"").unwrap();
        assert_eq!(style, TextStyle::Heading);
        let unknown: TextStyle = serde_json::from_str("\"marquee\"").unwrap();
        assert_eq!(unknown, TextStyle::Paragraph);
        assert_eq!(serde_json::to_string(&TextStyle::Plain).unwrap(), "\"plain\"");
    }
}
