//! Statement model for the lilt transpiler.
//!
//! A trimmed line of lilt notation classifies into exactly one [`Statement`]
//! variant; emission to JavaScript is a separate per-variant step in
//! `lilt_codegen`. No tree is ever built: a statement is derived from a
//! single line and discarded once its JavaScript text has been produced.

pub mod error;

pub use error::{Error, Result};

use serde::{Deserialize, Serialize};

/// How a declaration or assignment obtains its value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Initializer {
    /// A flat expression, reproduced verbatim.
    Expression(String),
    /// The result of a task call, introduced with the `from` marker.
    TaskResult { function: String, args: Vec<String> },
}

/// What a `return` statement produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReturnValue {
    /// A flat expression (empty for a bare `return`).
    Expression(String),
    /// The result of a task call (`return run …` / `return from …`).
    TaskResult { function: String, args: Vec<String> },
}

/// One classified line of lilt notation.
///
/// Variants are mutually exclusive: classification is a first-match scan
/// over fixed token positions, so no line can claim two kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Statement {
    /// A line with no content after trimming.
    Empty,
    /// A `//` comment, passed through unchanged.
    Comment { text: String },
    /// `value <name> is <expr>` or `value <name> is from <task> with <args>`.
    ValueDecl { name: String, init: Initializer },
    /// `<name> is <expr>` or `<name> is from <task> with <args>`.
    Assignment { target: String, value: Initializer },
    /// `when <lhs> <op> <rhs>`, opening an `if` block.
    Conditional { lhs: String, op: String, rhs: String },
    /// `until <var> equals <limit>`, opening a `while` block.
    BoundedLoop { var: String, limit: String },
    /// `run <task> [with <args>]`.
    Call { function: String, args: Vec<String> },
    /// `log '<literal>'`, where `{name}` marks an interpolation slot.
    Log { literal: String },
    /// `task <name> [gets <params>]`, opening a function block.
    TaskOpen { name: String, params: Vec<String> },
    /// `end`, closing the innermost open block.
    BlockEnd,
    /// `return`, `return <expr>`, or `return run <task> with <args>`.
    Return { value: ReturnValue },
    /// `object <name>`, declaring an empty mapping.
    ObjectDecl { name: String },
    /// `<object> property <prop> is <value>`.
    PropertyAssignment {
        object: String,
        property: String,
        value: String,
    },
    /// `using <library>`, expanded from the library registry.
    Import { library: String },
}

/// Options controlling emission, passed to the emitter at construction.
///
/// The transformer itself never reads process-wide state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmitOptions {
    /// Interleave a `// <source>` comment, at the same indentation, before
    /// each non-empty emitted statement.
    pub annotate_source: bool,
}
