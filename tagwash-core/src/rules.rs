//! The ordered rewrite-rule table applied ahead of allow-list sanitization.
//!
//! Each rule is a named pattern/replacement pair. Application order is
//! declaration order, and the order is load-bearing: block removal runs
//! before attribute stripping, attribute stripping before tag unwrapping,
//! unwrapping before empty-element removal, and whitespace collapse last.
//! Later rules assume the normalization performed by earlier ones.
//!
//! License: MIT OR Apache-2.0

/// Maximum allowed length for a rule pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// A single named rewrite applied to raw editor HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteRule {
    /// Unique identifier for the rule (e.g., "strip_script_blocks").
    pub name: &'static str,
    /// Human-readable description of what the rule targets.
    pub description: &'static str,
    /// The regex pattern string.
    pub pattern: &'static str,
    /// The replacement text.
    pub replace_with: &'static str,
    /// If true, the pattern is compiled case-insensitively.
    pub case_insensitive: bool,
    /// If true, the dot character `.` in the pattern will match newlines.
    pub dot_matches_new_line: bool,
    /// If true, the rule is reapplied until its output stops changing.
    pub fixpoint: bool,
}

impl RewriteRule {
    fn new(
        name: &'static str,
        description: &'static str,
        pattern: &'static str,
        replace_with: &'static str,
    ) -> Self {
        Self {
            name,
            description,
            pattern,
            replace_with,
            case_insensitive: true,
            dot_matches_new_line: false,
            fixpoint: false,
        }
    }

    fn spanning(self) -> Self {
        Self {
            dot_matches_new_line: true,
            ..self
        }
    }

    fn repeated(self) -> Self {
        Self {
            fixpoint: true,
            ..self
        }
    }
}

/// Returns the builtin rewrite-rule table, in application order.
pub fn builtin_rules() -> Vec<RewriteRule> {
    vec![
        RewriteRule::new(
            "strip_comments",
            "HTML comments",
            r"<!--.*?-->",
            "",
        )
        .spanning(),
        RewriteRule::new(
            "strip_script_blocks",
            "script elements and their content",
            r"<script\b[^>]*>.*?</script\s*>",
            "",
        )
        .spanning(),
        RewriteRule::new(
            "strip_style_blocks",
            "style elements and their content",
            r"<style\b[^>]*>.*?</style\s*>",
            "",
        )
        .spanning(),
        RewriteRule::new(
            "strip_encoded_script_blocks",
            "entity-encoded script elements, which would otherwise survive tag stripping and render literally",
            r"&lt;script\b.*?&gt;.*?&lt;/script\s*&gt;",
            "",
        )
        .spanning(),
        RewriteRule::new(
            "strip_encoded_style_blocks",
            "entity-encoded style elements",
            r"&lt;style\b.*?&gt;.*?&lt;/style\s*&gt;",
            "",
        )
        .spanning(),
        RewriteRule::new(
            "strip_office_tags",
            "proprietary word-processor namespace tags pasted from desktop editors",
            r"</?o:[^>]*>",
            "",
        ),
        RewriteRule::new(
            "strip_mso_styles",
            "mso-* style declarations pasted from desktop editors",
            r#"mso-[a-z-]+\s*:[^;"']*;?"#,
            "",
        ),
        RewriteRule::new(
            "strip_presentation_attrs",
            "style, class, data-*, contenteditable, and spellcheck attributes, any quote style",
            r#"\s(?:style|class|contenteditable|spellcheck|data-[a-z0-9-]*)\s*=\s*(?:"[^"]*"|'[^']*'|[^\s>]+)"#,
            "",
        ),
        RewriteRule::new(
            "strip_attr_remnants",
            "leftover empty attribute assignments",
            r#"\s*=\s*(?:""|'')"#,
            "",
        ),
        RewriteRule::new(
            "strip_font_properties",
            "font and color declarations in residual style text",
            r#"(?:font-family|font-size|background-color|color)\s*:\s*[^;"'>]*;?"#,
            "",
        ),
        RewriteRule::new(
            "unwrap_font_tags",
            "font tags, keeping inner content",
            r"</?font\b[^>]*>",
            "",
        ),
        RewriteRule::new(
            "unwrap_span_tags",
            "span tags, keeping inner content",
            r"</?span\b[^>]*>",
            "",
        ),
        RewriteRule::new(
            "open_divs_to_paragraphs",
            "div open tags rewritten to paragraph opens to unify block semantics",
            r"<div\b[^>]*>",
            "<p>",
        ),
        RewriteRule::new(
            "close_divs_to_paragraphs",
            "div close tags rewritten to paragraph closes",
            r"</div\s*>",
            "</p>",
        ),
        RewriteRule::new(
            "strip_paragraph_attrs",
            "attributes on remaining paragraph tags",
            r"<p\b[^>]*>",
            "<p>",
        ),
        RewriteRule::new(
            "collapse_doubled_strong",
            "redundant doubled bold opens emitted by editors",
            r"<strong>\s*<strong>|<b>\s*<b>",
            "<strong>",
        ),
        RewriteRule::new(
            "collapse_doubled_strong_close",
            "redundant doubled bold closes",
            r"</strong>\s*</strong>|</b>\s*</b>",
            "</strong>",
        ),
        RewriteRule::new(
            "collapse_doubled_emphasis",
            "redundant doubled emphasis opens",
            r"<em>\s*<em>|<i>\s*<i>",
            "<em>",
        ),
        RewriteRule::new(
            "collapse_doubled_emphasis_close",
            "redundant doubled emphasis closes",
            r"</em>\s*</em>|</i>\s*</i>",
            "</em>",
        ),
        RewriteRule::new(
            "drop_empty_elements",
            "formatting tag pairs containing only whitespace; reapplied because unwrapping an inner pair can expose an outer one",
            r"<p>\s*</p>|<strong>\s*</strong>|<em>\s*</em>|<i>\s*</i>|<b>\s*</b>|<u>\s*</u>",
            "",
        )
        .repeated(),
        RewriteRule::new(
            "collapse_whitespace",
            "whitespace runs",
            r"\s+",
            " ",
        ),
        RewriteRule::new(
            "collapse_break_runs",
            "three or more consecutive line breaks",
            r"(?:<br\s*/?>\s*){3,}",
            "<br><br>",
        ),
        RewriteRule::new(
            "drop_break_only_paragraphs",
            "paragraphs containing only a line break",
            r"<p>\s*<br\s*/?>\s*</p>",
            "",
        ),
    ]
}

/// Looks up a builtin rule by name.
pub fn builtin_rule(name: &str) -> Option<RewriteRule> {
    builtin_rules().into_iter().find(|rule| rule.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::compile_rules;

    fn apply(name: &str, input: &str) -> String {
        let rule = builtin_rule(name).unwrap();
        let compiled = compile_rules(vec![rule]).unwrap();
        compiled.apply_all(input)
    }

    #[test]
    fn test_rule_names_are_unique() {
        let rules = builtin_rules();
        let mut names: Vec<&str> = rules.iter().map(|r| r.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), rules.len());
    }

    #[test]
    fn test_strip_comments() {
        assert_eq!(apply("strip_comments", "a<!-- note\nacross lines -->b"), "ab");
    }

    #[test]
    fn test_strip_script_blocks() {
        assert_eq!(
            apply("strip_script_blocks", "<SCRIPT type=\"text/javascript\">alert(1)\n</script>x"),
            "x"
        );
    }

    #[test]
    fn test_strip_encoded_style_blocks() {
        assert_eq!(
            apply(
                "strip_encoded_style_blocks",
                "&lt;style&gt;p { color: red }&lt;/style&gt;kept"
            ),
            "kept"
        );
    }

    #[test]
    fn test_strip_office_tags() {
        assert_eq!(apply("strip_office_tags", "<o:p>text</o:p>"), "text");
    }

    #[test]
    fn test_strip_mso_styles() {
        assert_eq!(
            apply("strip_mso_styles", "mso-fareast-font-family: Calibri; rest"),
            " rest"
        );
    }

    #[test]
    fn test_strip_presentation_attrs() {
        assert_eq!(
            apply(
                "strip_presentation_attrs",
                r#"<p style="margin: 0" class='intro' data-id=7 spellcheck="false">x</p>"#
            ),
            "<p>x</p>"
        );
    }

    #[test]
    fn test_strip_font_properties_prefers_longest_name() {
        assert_eq!(
            apply("strip_font_properties", "background-color: #fff; color: red;"),
            " "
        );
    }

    #[test]
    fn test_unwrap_span_tags() {
        assert_eq!(apply("unwrap_span_tags", "<span lang=\"en\">a</span>"), "a");
    }

    #[test]
    fn test_divs_become_paragraphs() {
        let step1 = apply("open_divs_to_paragraphs", "<div align=\"left\">a</div>");
        assert_eq!(apply("close_divs_to_paragraphs", &step1), "<p>a</p>");
    }

    #[test]
    fn test_collapse_doubled_strong() {
        let step1 = apply("collapse_doubled_strong", "<b><b>x</b></b>");
        assert_eq!(apply("collapse_doubled_strong_close", &step1), "<strong>x</strong>");
    }

    #[test]
    fn test_drop_empty_elements_reaches_nested_pairs() {
        assert_eq!(apply("drop_empty_elements", "<p><b> </b></p>ok"), "ok");
    }

    #[test]
    fn test_collapse_break_runs() {
        assert_eq!(
            apply("collapse_break_runs", "a<br><br/><br />\n<br>b"),
            "a<br><br>b"
        );
        assert_eq!(apply("collapse_break_runs", "a<br><br>b"), "a<br><br>b");
    }

    #[test]
    fn test_drop_break_only_paragraphs() {
        assert_eq!(apply("drop_break_only_paragraphs", "<p> <br/> </p>x"), "x");
    }
}
