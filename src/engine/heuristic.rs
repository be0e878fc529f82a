//! Partial-line completion
//!
//! When the cursor line already holds text, the engine decides what to append
//! to finish it: a brace block for a block-opening statement, closing
//! parentheses plus a `;` terminator for an ordinary statement, or a bare
//! newline when the line is already terminated. Decisions are driven by
//! end-of-line markers and a raw parenthesis-balance scan; the scan is not
//! comment or string aware, which is a documented limitation of the engine.

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;
use serde::Serialize;
use tracing::debug;

use super::indent::{child_indent, indent_of};
use super::line::SourceLine;

/// Leading keywords that conventionally introduce a brace-delimited body.
static BLOCK_KEYWORDS: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "if", "for", "foreach", "while", "do", "function", "else", "class", "switch", "try",
        "catch", "with",
    ]
    .into_iter()
    .collect()
});

/// Text to append at the end of the edited line, and where the cursor lands
/// afterwards, relative to that line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditDescriptor {
    /// Text appended at the end of the current line.
    pub insert_text: String,
    /// Line offset of the resulting cursor position from the edited line.
    pub cursor_line_delta: u32,
    /// Column of the resulting cursor position.
    pub cursor_column: usize,
}

/// Decide how to finish a non-blank line.
///
/// The five branches are evaluated in strict priority order:
/// 1. block-opening keyword without a brace on this or the next line →
///    balance `(`, open a brace block with a blank child-indented body line;
/// 2. line ends with `{` → blank child line plus closing brace;
/// 3. line ends with `=>` → ` {`, blank child line, closing brace;
/// 4. line lacks a `;` terminator → balance `(`, append `;` and a newline;
/// 5. line already ends with `;` → newline only.
///
/// The cursor lands on the blank body line (branches 1-3) or on the following
/// line at the current indentation (branches 4-5).
pub fn complete(line: &SourceLine, next_line: Option<&SourceLine>, tab_width: usize) -> EditDescriptor {
    let indent = indent_of(&line.raw, tab_width);
    let child = child_indent(&line.raw, tab_width);
    let next_opens_brace = next_line.is_some_and(|l| l.trimmed.starts_with('{'));

    let descriptor = if BLOCK_KEYWORDS.contains(line.keyword.as_str())
        && !line.trimmed.ends_with('{')
        && !next_opens_brace
    {
        EditDescriptor {
            insert_text: format!(
                "{} {{\n{}\n{}}}",
                closing_parentheses(&line.trimmed),
                child.spaces,
                indent.spaces
            ),
            cursor_line_delta: 1,
            cursor_column: child.column,
        }
    } else if line.trimmed.ends_with('{') {
        EditDescriptor {
            insert_text: format!("\n{}\n{}}}", child.spaces, indent.spaces),
            cursor_line_delta: 1,
            cursor_column: child.column,
        }
    } else if line.trimmed.ends_with("=>") {
        EditDescriptor {
            insert_text: format!(" {{\n{}\n{}}}", child.spaces, indent.spaces),
            cursor_line_delta: 1,
            cursor_column: child.column,
        }
    } else if !line.trimmed.ends_with(';') {
        EditDescriptor {
            insert_text: format!("{};\n{}", closing_parentheses(&line.trimmed), indent.spaces),
            cursor_line_delta: 1,
            cursor_column: indent.column,
        }
    } else {
        EditDescriptor {
            insert_text: format!("\n{}", indent.spaces),
            cursor_line_delta: 1,
            cursor_column: indent.column,
        }
    };

    debug!(keyword = %line.keyword, insert = descriptor.insert_text.as_str(), "line completed");
    descriptor
}

/// Closing parentheses needed to balance unmatched `(` in `line`.
///
/// A single left-to-right scan counts `(` minus `)` over the whole line; only
/// a net-positive count produces output. Bracket characters inside string or
/// comment literals are counted like any other, a known heuristic gap.
pub fn closing_parentheses(line: &str) -> String {
    let mut open: i32 = 0;
    for ch in line.chars() {
        match ch {
            '(' => open += 1,
            ')' => open -= 1,
            _ => {}
        }
    }
    if open > 0 {
        ")".repeat(open as usize)
    } else {
        String::new()
    }
}
