//! Suggestion context assembly
//!
//! For a blank cursor line, the context captures everything the rule table is
//! allowed to see: the previous sibling statement, the nearest enclosing
//! ancestor, whether the position sits inside a loop, and whether a next
//! sibling follows. Built once per invocation from the document snapshot and
//! read-only thereafter.

use tracing::debug;

use super::line::SourceLine;
use super::navigator::{self, Direction};

/// The structural context of a blank line, as seen by suggestion rules.
#[derive(Debug, Clone)]
pub struct SuggestionContext {
    /// Previous sibling statement at the same indentation column, if any.
    pub previous: Option<SourceLine>,
    /// Nearest enclosing ancestor statement, if any.
    pub parent: Option<SourceLine>,
    /// True when any ancestor opens a loop body.
    pub within_loop: bool,
    /// True when a sibling statement follows the cursor line.
    pub has_next_sibling: bool,
}

impl SuggestionContext {
    /// Assemble the context for `cursor_line` from the document snapshot.
    pub fn assemble(lines: &[&str], cursor_line: usize, tab_width: usize) -> Self {
        let previous = navigator::find_sibling(lines, cursor_line, Direction::Previous, tab_width);
        let next = navigator::find_sibling(lines, cursor_line, Direction::Next, tab_width);
        let chain = navigator::ancestors(lines, cursor_line, tab_width);
        let within_loop = navigator::is_within_loop(&chain);
        let parent = chain.into_iter().next();

        let context = Self {
            previous,
            parent,
            within_loop,
            has_next_sibling: next.is_some(),
        };
        debug!(
            previous = context.previous_keyword(),
            parent = context.parent_keyword(),
            within_loop = context.within_loop,
            has_next_sibling = context.has_next_sibling,
            "suggestion context assembled"
        );
        context
    }

    /// Keyword of the previous sibling, or `""` when there is none.
    pub fn previous_keyword(&self) -> &str {
        self.previous.as_ref().map_or("", |l| l.keyword.as_str())
    }

    /// Trimmed text of the previous sibling, or `""` when there is none.
    pub fn previous_text(&self) -> &str {
        self.previous.as_ref().map_or("", |l| l.trimmed.as_str())
    }

    /// Keyword of the nearest ancestor, or `""` at top level.
    pub fn parent_keyword(&self) -> &str {
        self.parent.as_ref().map_or("", |l| l.keyword.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> Vec<&str> {
        text.lines().collect()
    }

    #[test]
    fn test_assemble_inside_loop_terminal_position() {
        let lines = doc("for (let i = 0; i < n; i++) {\n    ");
        let context = SuggestionContext::assemble(&lines, 1, 4);
        assert!(context.within_loop);
        assert!(!context.has_next_sibling);
        assert_eq!(context.parent_keyword(), "for");
        assert_eq!(context.previous_keyword(), "");
    }

    #[test]
    fn test_assemble_with_previous_sibling_and_next() {
        let lines = doc("    let total = 0;\n    \n    use(total);");
        let context = SuggestionContext::assemble(&lines, 1, 4);
        assert_eq!(context.previous_keyword(), "let");
        assert_eq!(context.previous_text(), "let total = 0;");
        assert!(context.has_next_sibling);
        assert!(!context.within_loop);
    }

    #[test]
    fn test_assemble_empty_document_position() {
        let lines = doc("");
        let context = SuggestionContext::assemble(&lines, 0, 4);
        assert!(context.previous.is_none());
        assert!(context.parent.is_none());
        assert!(!context.has_next_sibling);
    }
}
