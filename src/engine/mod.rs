//! Heuristic line-completion engine
//!
//! This module wires the pieces together:
//! - [`line`] classifies raw lines into statements and extracts keywords
//! - [`indent`] maps leading whitespace to visual columns
//! - [`navigator`] finds sibling statements and the ancestor chain
//! - [`context`] assembles the read-only suggestion context
//! - [`rules`] evaluates the declarative rule table into ranked candidates
//! - [`heuristic`] finishes a non-blank line with braces, parens, or `;`
//!
//! The engine is stateless: every invocation reconstructs its view of the
//! document from the snapshot passed in, so rapid repeated invocations are
//! independent and never observe stale state.

pub mod context;
pub mod heuristic;
pub mod indent;
pub mod line;
pub mod navigator;
pub mod rules;

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;
use serde::Serialize;
use tracing::debug;

pub use heuristic::{closing_parentheses, EditDescriptor};
pub use navigator::{ancestors, find_sibling, is_within_loop, Direction};
pub use rules::Candidate;

use context::SuggestionContext;
use line::SourceLine;

/// Language identifiers the engine performs structural matching for.
/// Anything else yields [`Outcome::NoSuggestion`] immediately.
static SUPPORTED_LANGUAGES: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "javascript",
        "javascriptreact",
        "typescript",
        "typescriptreact",
        "java",
        "c",
        "cpp",
        "csharp",
        "go",
        "php",
    ]
    .into_iter()
    .collect()
});

/// Result of one completion invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Outcome {
    /// Append text to the current line and move the cursor.
    Edit(EditDescriptor),
    /// Ranked snippet candidates for the host to present.
    Candidates(Vec<Candidate>),
    /// Nothing to offer; the host falls back to its default template picker.
    NoSuggestion,
}

/// Run one completion request against a document snapshot.
///
/// For a non-blank cursor line the outcome is a single [`EditDescriptor`]
/// finishing the line. For a blank cursor line the structural context is
/// analyzed and the rule table produces ranked candidates; an empty match set
/// becomes [`Outcome::NoSuggestion`]. Degenerate input (out-of-bounds cursor,
/// empty document, unsupported language) also yields `NoSuggestion`, never an
/// error.
///
/// A `tab_width` of zero is normalized to 4, matching editors that report no
/// configured tab size.
pub fn complete_line(
    lines: &[&str],
    language_id: &str,
    cursor_line: usize,
    tab_width: usize,
) -> Outcome {
    let tab_width = if tab_width == 0 { 4 } else { tab_width };

    if !SUPPORTED_LANGUAGES.contains(language_id) {
        debug!(language_id, "unsupported language");
        return Outcome::NoSuggestion;
    }
    let Some(raw) = lines.get(cursor_line).copied() else {
        debug!(cursor_line, "cursor outside document");
        return Outcome::NoSuggestion;
    };

    let current = SourceLine::parse(raw, tab_width);
    if current.is_blank() {
        let context = SuggestionContext::assemble(lines, cursor_line, tab_width);
        // With no sibling and no ancestor there is nothing structural to go
        // on; let the host's default template picker take over.
        if context.previous.is_none() && context.parent.is_none() {
            return Outcome::NoSuggestion;
        }
        let candidates = rules::match_rules(&context, language_id);
        if candidates.is_empty() {
            Outcome::NoSuggestion
        } else {
            Outcome::Candidates(candidates)
        }
    } else {
        let next = lines
            .get(cursor_line + 1)
            .map(|raw| SourceLine::parse(raw, tab_width));
        Outcome::Edit(heuristic::complete(&current, next.as_ref(), tab_width))
    }
}
