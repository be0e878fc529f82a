//! Structural navigation over the document snapshot
//!
//! The engine has no parser; indentation is the authoritative block boundary.
//! Given a line index, the navigator finds the previous and next sibling
//! statements (same column, without crossing a lower-indentation boundary) and
//! the ancestor chain (enclosing block openers, innermost first). This
//! tolerates missing or unbalanced braces while the user is mid-edit.

use tracing::trace;

use super::line::SourceLine;

/// Scan direction for sibling lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Find the nearest sibling statement of `index` in the given direction.
///
/// A sibling is a statement line at the same indentation column. Lines that
/// are not statements, and statements indented deeper (nested children), are
/// skipped transparently. The scan stops with `None` as soon as a statement
/// with a strictly smaller column is reached: that statement belongs to an
/// enclosing block, so no sibling exists in this direction.
pub fn find_sibling(
    lines: &[&str],
    index: usize,
    direction: Direction,
    tab_width: usize,
) -> Option<SourceLine> {
    let target = super::indent::column_of(lines.get(index)?, tab_width);

    let candidates: Box<dyn Iterator<Item = &&str> + '_> = match direction {
        Direction::Previous => Box::new(lines[..index].iter().rev()),
        Direction::Next => Box::new(lines.get(index + 1..).unwrap_or(&[]).iter()),
    };

    for raw in candidates {
        let line = SourceLine::parse(raw, tab_width);
        if !line.is_statement() {
            continue;
        }
        if line.column < target {
            trace!(column = line.column, target, "crossed block boundary, no sibling");
            return None;
        }
        if line.column == target {
            return Some(line);
        }
        // Deeper-indented statement: a nested child, skip it.
    }
    None
}

/// Compute the ancestor chain of `index`: enclosing block-opening statements,
/// innermost first.
///
/// Scanning backward, each nearest statement whose column is strictly below
/// the running minimum (seeded with the target line's own column) is an
/// ancestor; appending it lowers the minimum. The resulting columns are
/// strictly decreasing. The chain is empty at top level.
pub fn ancestors(lines: &[&str], index: usize, tab_width: usize) -> Vec<SourceLine> {
    let mut chain = Vec::new();
    let Some(raw) = lines.get(index) else {
        return chain;
    };
    let mut minimum = super::indent::column_of(raw, tab_width);

    for raw in lines[..index].iter().rev() {
        let line = SourceLine::parse(raw, tab_width);
        if !line.is_statement() {
            continue;
        }
        if line.column < minimum {
            minimum = line.column;
            chain.push(line);
            if minimum == 0 {
                break;
            }
        }
    }

    trace!(depth = chain.len(), "ancestor chain computed");
    chain
}

/// Keywords that open a loop body.
const LOOP_KEYWORDS: [&str; 4] = ["for", "foreach", "do", "while"];

/// Whether any ancestor in the chain opens a loop.
pub fn is_within_loop(chain: &[SourceLine]) -> bool {
    chain
        .iter()
        .any(|line| LOOP_KEYWORDS.contains(&line.keyword.as_str()))
}
