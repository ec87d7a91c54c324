//! Line scanner for lilt notation.
//!
//! lilt has no token grammar beyond whitespace: a physical line scans into a
//! [`SourceLine`] carrying its nesting depth (leading spaces / 2), trimmed
//! text, and the trimmed text split on single spaces. Depth is recomputed
//! independently for every line; nothing carries across lines.

use lilt_syntax::{Error, Result};

/// A physical line of lilt source with its derived attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// The raw line as read, without its terminator.
    pub raw: String,
    /// Nesting depth: leading space count divided by two.
    pub depth: usize,
    /// The line with surrounding whitespace removed.
    pub trimmed: String,
    /// `trimmed` split on single spaces; empty when `trimmed` is empty.
    /// Runs of interior spaces therefore yield empty tokens.
    pub tokens: Vec<String>,
}

/// Count leading spaces and convert the count to a nesting depth.
///
/// Fails when the count is odd. Tabs and other whitespace are not treated
/// as indentation; they end the count and remain part of the line.
pub fn indent_depth(raw: &str) -> Result<usize> {
    let spaces = raw.chars().take_while(|&c| c == ' ').count();
    if spaces % 2 != 0 {
        return Err(Error::OddIndentation {
            line: raw.to_string(),
        });
    }
    Ok(spaces / 2)
}

/// Scan one raw line into a [`SourceLine`].
pub fn scan_line(raw: &str) -> Result<SourceLine> {
    let depth = indent_depth(raw)?;
    let trimmed = raw.trim().to_string();
    let tokens = if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split(' ').map(str::to_string).collect()
    };
    Ok(SourceLine {
        raw: raw.to_string(),
        depth,
        trimmed,
        tokens,
    })
}
