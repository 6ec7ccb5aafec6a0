//! compiler.rs - Compilation and caching of the rewrite-rule table.
//!
//! This module converts [`RewriteRule`]s into [`CompiledRules`], which are
//! optimized for repeated application. The builtin table is compiled once
//! per process and shared behind an `Arc`.
//!
//! License: MIT OR APACHE 2.0

use anyhow::Result;
use log::debug;
use once_cell::sync::OnceCell;
use regex::{Regex, RegexBuilder};
use std::sync::Arc;

use crate::errors::TagwashError;
use crate::rules::{builtin_rules, RewriteRule, MAX_PATTERN_LENGTH};

/// Upper bound on passes for rules that reapply to a fixed point.
///
/// Empty-element nesting deeper than this survives, which is acceptable:
/// the allow-list pass still guarantees the output is safe markup.
const FIXPOINT_PASS_LIMIT: usize = 10;

/// A single compiled rewrite rule.
#[derive(Debug)]
pub struct CompiledRule {
    /// The compiled regular expression used for matching.
    pub regex: Regex,
    /// The replacement text applied to matches.
    pub replace_with: &'static str,
    /// The unique name of the rule.
    pub name: &'static str,
    /// If true, the rule reapplies until its output stops changing.
    pub fixpoint: bool,
}

impl CompiledRule {
    /// Applies this rule to `input`, honoring the fixpoint flag.
    pub fn apply(&self, input: &str) -> String {
        if !self.fixpoint {
            return self.regex.replace_all(input, self.replace_with).into_owned();
        }
        let mut current = input.to_string();
        for _ in 0..FIXPOINT_PASS_LIMIT {
            let next = self.regex.replace_all(&current, self.replace_with).into_owned();
            if next == current {
                break;
            }
            current = next;
        }
        current
    }
}

/// The full compiled rule table, in application order.
#[derive(Debug)]
pub struct CompiledRules {
    /// A vector of `CompiledRule` instances ready for application.
    pub rules: Vec<CompiledRule>,
}

impl CompiledRules {
    /// Runs every rule over `input`, feeding each rule's output to the next.
    pub fn apply_all(&self, input: &str) -> String {
        let mut current = input.to_string();
        for rule in &self.rules {
            current = rule.apply(&current);
        }
        current
    }
}

/// Compiles a list of `RewriteRule`s into `CompiledRules`.
/// This is the low-level function that performs the actual regex compilation.
pub fn compile_rules(rules_to_compile: Vec<RewriteRule>) -> Result<CompiledRules, TagwashError> {
    debug!("Starting compilation of {} rules.", rules_to_compile.len());

    let mut compiled_rules = Vec::new();
    let mut compilation_errors = Vec::new();

    for rule in rules_to_compile {
        if rule.pattern.len() > MAX_PATTERN_LENGTH {
            compilation_errors.push(TagwashError::PatternLengthExceeded(
                rule.name.to_string(),
                rule.pattern.len(),
                MAX_PATTERN_LENGTH,
            ));
            continue;
        }

        let regex_result = RegexBuilder::new(rule.pattern)
            .case_insensitive(rule.case_insensitive)
            .dot_matches_new_line(rule.dot_matches_new_line)
            .size_limit(10 * (1 << 20)) // 10 MB limit for compiled regex
            .build();

        match regex_result {
            Ok(regex) => {
                debug!(
                    target: "tagwash_core::compiler",
                    "Rule '{}' compiled successfully.",
                    rule.name
                );
                compiled_rules.push(CompiledRule {
                    regex,
                    replace_with: rule.replace_with,
                    name: rule.name,
                    fixpoint: rule.fixpoint,
                });
            }
            Err(e) => {
                compilation_errors.push(TagwashError::RuleCompilationError(
                    rule.name.to_string(),
                    e,
                ));
            }
        }
    }

    if !compilation_errors.is_empty() {
        let error_message = compilation_errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        Err(TagwashError::Fatal(format!(
            "Failed to compile {} rule(s):\n{}",
            compilation_errors.len(),
            error_message
        )))
    } else {
        debug!(
            "Finished compiling rules. Total compiled: {}.",
            compiled_rules.len()
        );
        Ok(CompiledRules {
            rules: compiled_rules,
        })
    }
}

/// The once-compiled builtin rule table, shared process-wide.
static COMPILED_BUILTIN: OnceCell<Arc<CompiledRules>> = OnceCell::new();

/// Returns the shared compiled builtin table, compiling it on first use.
///
/// Returns an `Arc` to allow cheap sharing between engines.
pub fn shared_rules() -> Result<Arc<CompiledRules>, TagwashError> {
    let compiled = COMPILED_BUILTIN.get_or_try_init(|| {
        debug!("Builtin rules not yet compiled. Compiling now.");
        compile_rules(builtin_rules()).map(Arc::new)
    })?;
    Ok(Arc::clone(compiled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_compiles() {
        let compiled = compile_rules(builtin_rules()).unwrap();
        assert_eq!(compiled.rules.len(), builtin_rules().len());
    }

    #[test]
    fn test_shared_rules_returns_same_table() {
        let a = shared_rules().unwrap();
        let b = shared_rules().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_invalid_pattern_is_reported_by_name() {
        let rule = RewriteRule {
            name: "broken",
            description: "an unclosed group",
            pattern: r"(",
            replace_with: "",
            case_insensitive: false,
            dot_matches_new_line: false,
            fixpoint: false,
        };
        let err = compile_rules(vec![rule]).unwrap_err();
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn test_fixpoint_rule_stops_on_stable_output() {
        let rule = RewriteRule {
            name: "dedupe_a",
            description: "collapses doubled letters",
            pattern: "aa",
            replace_with: "a",
            case_insensitive: false,
            dot_matches_new_line: false,
            fixpoint: true,
        };
        let compiled = compile_rules(vec![rule]).unwrap();
        assert_eq!(compiled.apply_all("aaaaaaaa"), "a");
        assert_eq!(compiled.apply_all("b"), "b");
    }
}
