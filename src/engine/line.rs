//! Line classification
//!
//! A [`SourceLine`] is the engine's view of one raw document line: its trimmed
//! text, its visual indentation column, and its leading keyword. Lines are
//! classified into statements and non-statements; only statement lines carry
//! structural weight when navigating siblings and ancestors.
//!
//! Classification is purely textual. Blank lines, comment lines, and lone
//! braces are structurally insignificant; everything else is a statement.

use super::indent::column_of;

/// Comment markers that disqualify a line from being a statement.
const COMMENT_MARKERS: [&str; 4] = ["//", "/*", "*/", "*"];

/// One line of the document snapshot, classified on demand.
///
/// Immutable once constructed; never cached across invocations because the
/// document may have changed between requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// The raw line text, whitespace included.
    pub raw: String,
    /// The line text with surrounding whitespace removed.
    pub trimmed: String,
    /// Visual column of the first non-whitespace character.
    pub column: usize,
    /// Longest leading run of word characters of the trimmed text, or empty
    /// if the line starts with a non-word character.
    pub keyword: String,
}

impl SourceLine {
    /// Classify a raw line under the given tab width.
    pub fn parse(raw: &str, tab_width: usize) -> Self {
        let trimmed = raw.trim().to_string();
        let column = column_of(raw, tab_width);
        let keyword = leading_keyword(&trimmed);
        Self {
            raw: raw.to_string(),
            trimmed,
            column,
            keyword,
        }
    }

    /// Whether this line carries meaningful code structure.
    ///
    /// Blank lines, comment lines (`//`, `/*`, `*/`, `*`), and lone `{`/`}`
    /// lines are not statements; everything else is.
    pub fn is_statement(&self) -> bool {
        if self.trimmed.is_empty() {
            return false;
        }
        if COMMENT_MARKERS.iter().any(|m| self.trimmed.starts_with(m)) {
            return false;
        }
        !matches!(self.trimmed.as_str(), "{" | "}")
    }

    /// Whether the line is blank (empty or whitespace-only).
    pub fn is_blank(&self) -> bool {
        self.trimmed.is_empty()
    }
}

fn leading_keyword(trimmed: &str) -> String {
    trimmed
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}
