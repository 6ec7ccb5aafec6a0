//! Allow-list sanitization of rewritten HTML.
//!
//! Everything ahead of this stage is normalization; this stage is the
//! security boundary. Tags outside the allow-list are unwrapped (their
//! content survives, their markup does not), the forbidden set is removed
//! together with its content, and no attribute of any kind survives.
//!
//! License: MIT OR Apache-2.0

use ammonia::Builder;
use log::debug;
use std::collections::HashSet;

use crate::config::{ProcessOptions, FORBIDDEN_TAGS};

/// Runs the allow-list pass over `html`.
///
/// When `preserve_formatting` is off the tag set is empty and every tag is
/// unwrapped, leaving only text. The allow set is filtered against
/// [`FORBIDDEN_TAGS`] because ammonia rejects overlapping allow and
/// content-discard sets.
pub fn allowlist_clean(html: &str, options: &ProcessOptions) -> String {
    let allowed: HashSet<&str> = if options.preserve_formatting {
        options
            .allowed_tags
            .iter()
            .map(String::as_str)
            .filter(|tag| !FORBIDDEN_TAGS.contains(tag))
            .collect()
    } else {
        HashSet::new()
    };
    debug!("Allow-list pass with {} permitted tags.", allowed.len());

    let mut builder = Builder::empty();
    builder
        .tags(allowed)
        .clean_content_tags(FORBIDDEN_TAGS.iter().copied().collect())
        .strip_comments(true)
        .link_rel(None);
    builder.clean(html).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlisted_tags_are_unwrapped_not_deleted() {
        let options = ProcessOptions::default();
        assert_eq!(
            allowlist_clean("<article><p>kept</p></article>", &options),
            "<p>kept</p>"
        );
    }

    #[test]
    fn test_forbidden_content_is_discarded() {
        let options = ProcessOptions::default();
        let cleaned = allowlist_clean("<iframe>spy</iframe><p>ok</p>", &options);
        assert_eq!(cleaned, "<p>ok</p>");
    }

    #[test]
    fn test_no_formatting_strips_every_tag() {
        let options = ProcessOptions {
            preserve_formatting: false,
            ..ProcessOptions::default()
        };
        assert_eq!(allowlist_clean("<p><b>text</b></p>", &options), "text");
    }

    #[test]
    fn test_attributes_never_survive() {
        let options = ProcessOptions::default();
        let cleaned = allowlist_clean(r#"<p id="x" onclick="evil()">y</p>"#, &options);
        assert_eq!(cleaned, "<p>y</p>");
    }

    #[test]
    fn test_forbidden_tag_in_allow_list_is_ignored() {
        let options = ProcessOptions {
            allowed_tags: vec!["p".to_string(), "iframe".to_string()],
            ..ProcessOptions::default()
        };
        let cleaned = allowlist_clean("<iframe>spy</iframe><p>ok</p>", &options);
        assert_eq!(cleaned, "<p>ok</p>");
    }
}
