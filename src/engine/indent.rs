//! Indentation model
//!
//! Converts leading whitespace into a visual column count under a configurable
//! tab width, and derives the whitespace string for a child block one nesting
//! level deeper. Columns are the only unit of comparison in the engine; raw
//! whitespace strings are never compared against each other, so documents that
//! mix tabs and spaces are handled consistently as long as the tab width is
//! uniform.

/// Leading whitespace of a line together with its visual column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indent {
    /// The literal whitespace characters, suitable for re-emitting.
    pub spaces: String,
    /// Visual column of the first non-whitespace character.
    pub column: usize,
}

/// Visual column of the first non-whitespace character of `line`.
///
/// Each space counts 1, each tab counts `tab_width`. A blank or
/// whitespace-only line yields the column of its (virtual) end.
pub fn column_of(line: &str, tab_width: usize) -> usize {
    let mut column = 0;
    for ch in line.chars() {
        match ch {
            ' ' => column += 1,
            '\t' => column += tab_width,
            _ => break,
        }
    }
    column
}

/// The indentation of `line` itself: its leading whitespace and column.
pub fn indent_of(line: &str, tab_width: usize) -> Indent {
    let mut spaces = String::new();
    let mut column = 0;
    for ch in line.chars() {
        match ch {
            ' ' => {
                spaces.push(' ');
                column += 1;
            }
            '\t' => {
                spaces.push('\t');
                column += tab_width;
            }
            _ => break,
        }
    }
    Indent { spaces, column }
}

/// The indentation one nesting level deeper than `line`: the line's own
/// leading whitespace extended by `tab_width` space characters.
pub fn child_indent(line: &str, tab_width: usize) -> Indent {
    let mut indent = indent_of(line, tab_width);
    for _ in 0..tab_width {
        indent.spaces.push(' ');
    }
    indent.column += tab_width;
    indent
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_of_spaces() {
        assert_eq!(column_of("    x", 4), 4);
        assert_eq!(column_of("x", 4), 0);
        assert_eq!(column_of("", 4), 0);
    }

    #[test]
    fn test_column_of_tabs() {
        assert_eq!(column_of("\tx", 4), 4);
        assert_eq!(column_of("\t\tx", 2), 4);
        assert_eq!(column_of("\t  x", 4), 6);
    }

    #[test]
    fn test_column_of_stops_at_first_non_whitespace() {
        // Interior whitespace does not count
        assert_eq!(column_of("  a\tb", 4), 2);
    }

    #[test]
    fn test_indent_of_preserves_literal_whitespace() {
        let indent = indent_of("\t  if (x) {", 4);
        assert_eq!(indent.spaces, "\t  ");
        assert_eq!(indent.column, 6);
    }

    #[test]
    fn test_child_indent_extends_with_spaces() {
        let child = child_indent("    if (x) {", 4);
        assert_eq!(child.spaces, "        ");
        assert_eq!(child.column, 8);
    }

    #[test]
    fn test_child_indent_keeps_parent_tabs() {
        let child = child_indent("\tfor (;;) {", 4);
        assert_eq!(child.spaces, "\t    ");
        assert_eq!(child.column, 8);
    }
}
