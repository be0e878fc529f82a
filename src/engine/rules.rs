//! Declarative suggestion rules
//!
//! The rule table maps structural context to ranked statement snippets. Each
//! rule carries a label template, a snippet body template, an optional
//! language filter, and a tagged predicate evaluated against the assembled
//! [`SuggestionContext`]. Predicates are data, not closures, so the matching
//! logic stays inspectable and testable.
//!
//! Ordering matters: language-specific iteration forms come before the
//! generic `if`/`while` forms, so when several rules match the same context
//! the more idiomatic suggestion ranks first. Templates substitute captured
//! strings into `@1..@n`; snippet bodies additionally carry the host's
//! tab-stop markers (`$0`, `${1:name}`) untouched.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use super::context::SuggestionContext;

/// Outcome of evaluating a predicate against a context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredicateResult {
    /// The rule does not apply.
    NoMatch,
    /// The rule applies; no capture groups bound.
    Match,
    /// The rule applies with captured strings bound to `@1..@n`.
    MatchWith(Vec<String>),
}

/// A declarative condition over the suggestion context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// The previous sibling's keyword equals the given keyword.
    PreviousKeywordIs(&'static str),
    /// The nearest ancestor's keyword equals the given keyword.
    ParentKeywordIs(&'static str),
    /// No sibling statement follows the cursor line.
    Terminal,
    /// Inside a loop body and no sibling statement follows.
    LoopTerminal,
    /// The previous sibling looks like an assignment; captures the assigned
    /// name as `@1`.
    PreviousAssignment,
}

/// Matches `let/const/var NAME = ...` and bare `NAME = ...`, rejecting `==`
/// comparisons and `=>` arrows. The assigned name is the single capture.
static ASSIGNMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(?:let|const|var)\s+)?([A-Za-z_$][A-Za-z0-9_$]*)\s*=(?:[^=>]|$)")
        .expect("assignment pattern must compile")
});

impl Predicate {
    /// Evaluate this predicate against the context.
    pub fn evaluate(&self, context: &SuggestionContext) -> PredicateResult {
        match self {
            Predicate::PreviousKeywordIs(keyword) => {
                if context.previous_keyword() == *keyword {
                    PredicateResult::Match
                } else {
                    PredicateResult::NoMatch
                }
            }
            Predicate::ParentKeywordIs(keyword) => {
                if context.parent_keyword() == *keyword {
                    PredicateResult::Match
                } else {
                    PredicateResult::NoMatch
                }
            }
            Predicate::Terminal => {
                if context.has_next_sibling {
                    PredicateResult::NoMatch
                } else {
                    PredicateResult::Match
                }
            }
            Predicate::LoopTerminal => {
                if context.within_loop && !context.has_next_sibling {
                    PredicateResult::Match
                } else {
                    PredicateResult::NoMatch
                }
            }
            Predicate::PreviousAssignment => match ASSIGNMENT.captures(context.previous_text()) {
                Some(captures) => PredicateResult::MatchWith(vec![captures[1].to_string()]),
                None => PredicateResult::NoMatch,
            },
        }
    }
}

/// One entry of the suggestion rule table.
#[derive(Debug, Clone)]
pub struct SuggestionRule {
    /// Label template shown to the user, with `@1..@n` placeholders.
    pub label: &'static str,
    /// Snippet body template with `@1..@n` placeholders and host tab stops.
    pub snippet: &'static str,
    /// Language identifiers this rule applies to; `None` applies to all.
    pub languages: Option<&'static [&'static str]>,
    /// The condition under which this rule produces a candidate.
    pub predicate: Predicate,
}

/// A resolved label/snippet pair, ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub label: String,
    pub snippet: String,
}

const JS_FAMILY: &[&str] = &[
    "javascript",
    "javascriptreact",
    "typescript",
    "typescriptreact",
];

/// The rule table, in rank order.
pub const RULES: &[SuggestionRule] = &[
    SuggestionRule {
        label: "else if (...)...",
        snippet: "else if (${1:condition}) {\n\t$0\n}",
        languages: None,
        predicate: Predicate::PreviousKeywordIs("if"),
    },
    SuggestionRule {
        label: "else...",
        snippet: "else {\n\t$0\n}",
        languages: None,
        predicate: Predicate::PreviousKeywordIs("if"),
    },
    SuggestionRule {
        label: "catch...",
        snippet: "catch (${1:err}) {\n\t$0\n}",
        languages: None,
        predicate: Predicate::PreviousKeywordIs("try"),
    },
    SuggestionRule {
        label: "case...",
        snippet: "case ${1:value}:\n\t$0\n\tbreak;",
        languages: None,
        predicate: Predicate::ParentKeywordIs("switch"),
    },
    SuggestionRule {
        label: "default...",
        snippet: "default:\n\t$0",
        languages: None,
        predicate: Predicate::ParentKeywordIs("switch"),
    },
    SuggestionRule {
        label: "foreach (var ... in @1)...",
        snippet: "foreach (var ${1:item} in @1)\n{\n\t$0\n}",
        languages: Some(&["csharp"]),
        predicate: Predicate::PreviousAssignment,
    },
    SuggestionRule {
        label: "foreach (@1 as ...)...",
        snippet: "foreach (@1 as $${1:item}) {\n\t$0\n}",
        languages: Some(&["php"]),
        predicate: Predicate::PreviousAssignment,
    },
    SuggestionRule {
        label: "for (const ... of @1)...",
        snippet: "for (const ${1:item} of @1) {\n\t$0\n}",
        languages: Some(JS_FAMILY),
        predicate: Predicate::PreviousAssignment,
    },
    SuggestionRule {
        label: "if (@1)...",
        snippet: "if (@1) {\n\t$0\n}",
        languages: None,
        predicate: Predicate::PreviousAssignment,
    },
    SuggestionRule {
        label: "while (@1)...",
        snippet: "while (@1) {\n\t$0\n}",
        languages: None,
        predicate: Predicate::PreviousAssignment,
    },
    SuggestionRule {
        label: "break;",
        snippet: "break;",
        languages: None,
        predicate: Predicate::LoopTerminal,
    },
    SuggestionRule {
        label: "continue;",
        snippet: "continue;",
        languages: None,
        predicate: Predicate::LoopTerminal,
    },
    SuggestionRule {
        label: "return;",
        snippet: "return;",
        languages: None,
        predicate: Predicate::Terminal,
    },
];

/// Evaluate the rule table against a context, in table order.
///
/// Returns the resolved candidates; an empty list means the engine has
/// nothing idiomatic to offer and the host should fall back to its own
/// default template picker.
pub fn match_rules(context: &SuggestionContext, language_id: &str) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    for rule in RULES {
        if let Some(languages) = rule.languages {
            if !languages.contains(&language_id) {
                continue;
            }
        }
        let captures = match rule.predicate.evaluate(context) {
            PredicateResult::NoMatch => continue,
            PredicateResult::Match => Vec::new(),
            PredicateResult::MatchWith(captures) => captures,
        };
        candidates.push(Candidate {
            label: substitute(rule.label, &captures),
            snippet: substitute(rule.snippet, &captures),
        });
    }
    debug!(count = candidates.len(), language_id, "rule table evaluated");
    candidates
}

/// Substitute `@1..@n` placeholders with the captured strings.
fn substitute(template: &str, captures: &[String]) -> String {
    let mut resolved = template.to_string();
    for (i, capture) in captures.iter().enumerate() {
        resolved = resolved.replace(&format!("@{}", i + 1), capture);
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::line::SourceLine;

    fn context_with_previous(text: &str) -> SuggestionContext {
        SuggestionContext {
            previous: Some(SourceLine::parse(text, 4)),
            parent: None,
            within_loop: false,
            has_next_sibling: true,
        }
    }

    #[test]
    fn test_assignment_pattern_captures_name() {
        for (text, name) in [
            ("let total = 0;", "total"),
            ("const items = load();", "items"),
            ("var n = 3", "n"),
            ("count = count + 1;", "count"),
            ("$total = 5;", "$total"),
        ] {
            let captures = ASSIGNMENT.captures(text).unwrap_or_else(|| {
                panic!("expected assignment match for {text:?}")
            });
            assert_eq!(&captures[1], name);
        }
    }

    #[test]
    fn test_assignment_pattern_rejects_comparisons_and_arrows() {
        assert!(ASSIGNMENT.captures("x == y").is_none());
        assert!(ASSIGNMENT.captures("x => x * 2").is_none());
        assert!(ASSIGNMENT.captures("if (x)").is_none());
        assert!(ASSIGNMENT.captures("").is_none());
    }

    #[test]
    fn test_else_rules_after_if_sibling() {
        let context = context_with_previous("if (x > 0) {");
        let candidates = match_rules(&context, "javascript");
        let labels: Vec<&str> = candidates.iter().map(|c| c.label.as_str()).collect();
        assert!(labels.contains(&"else if (...)..."));
        assert!(labels.contains(&"else..."));
    }

    #[test]
    fn test_catch_after_try_sibling() {
        let context = context_with_previous("try {");
        let candidates = match_rules(&context, "java");
        assert!(candidates.iter().any(|c| c.label == "catch..."));
    }

    #[test]
    fn test_case_and_default_inside_switch() {
        let context = SuggestionContext {
            previous: None,
            parent: Some(SourceLine::parse("switch (x) {", 4)),
            within_loop: false,
            has_next_sibling: true,
        };
        let candidates = match_rules(&context, "c");
        let labels: Vec<&str> = candidates.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["case...", "default..."]);
    }

    #[test]
    fn test_assignment_binds_capture_into_label_and_snippet() {
        let context = context_with_previous("let total = 0;");
        let candidates = match_rules(&context, "javascript");
        let if_rule = candidates
            .iter()
            .find(|c| c.label.starts_with("if ("))
            .expect("generic if rule should match");
        assert_eq!(if_rule.label, "if (total)...");
        assert_eq!(if_rule.snippet, "if (total) {\n\t$0\n}");
    }

    #[test]
    fn test_language_specific_iteration_ranks_before_generic_if() {
        let context = context_with_previous("const items = load();");
        let candidates = match_rules(&context, "typescript");
        let for_of = candidates
            .iter()
            .position(|c| c.label == "for (const ... of items)...")
            .expect("for...of should match for typescript");
        let generic_if = candidates
            .iter()
            .position(|c| c.label == "if (items)...")
            .expect("generic if should match");
        assert!(for_of < generic_if);
        // The C# form must not leak into typescript results.
        assert!(!candidates.iter().any(|c| c.label.starts_with("foreach")));
    }

    #[test]
    fn test_foreach_only_for_csharp() {
        let context = context_with_previous("var items = Load();");
        let candidates = match_rules(&context, "csharp");
        assert!(candidates
            .iter()
            .any(|c| c.label == "foreach (var ... in items)..."));
    }

    #[test]
    fn test_loop_terminal_offers_break_continue_return() {
        let context = SuggestionContext {
            previous: None,
            parent: Some(SourceLine::parse("for (;;) {", 4)),
            within_loop: true,
            has_next_sibling: false,
        };
        let candidates = match_rules(&context, "javascript");
        let labels: Vec<&str> = candidates.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["break;", "continue;", "return;"]);
    }

    #[test]
    fn test_no_rules_match_yields_empty_list() {
        let context = SuggestionContext {
            previous: Some(SourceLine::parse("foo();", 4)),
            parent: None,
            within_loop: false,
            has_next_sibling: true,
        };
        assert!(match_rules(&context, "javascript").is_empty());
    }

    #[test]
    fn test_substitute_replaces_all_occurrences() {
        let resolved = substitute("for (const x of @1) { use(@1); }", &["items".to_string()]);
        assert_eq!(resolved, "for (const x of items) { use(items); }");
    }
}
