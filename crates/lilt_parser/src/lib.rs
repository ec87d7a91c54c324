//! Classification of scanned lilt lines into [`lilt_syntax::Statement`]
//! values.
//!
//! A prioritized first-match scan over fixed token positions and keywords.
//! There is no lookahead beyond the current line, no backtracking, and no
//! state retained across lines.

pub mod classify;

pub use classify::{classify, parse_source, ParsedLine};
