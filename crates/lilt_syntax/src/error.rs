//! Error type shared across the lilt crates.

use thiserror::Error;

/// Result alias used throughout the lilt crates.
pub type Result<T> = std::result::Result<T, Error>;

/// A transformation failure.
///
/// Every rule violation is fatal to the current pass: there is no warning
/// level, no recovery, and no partial output. Variants differ only in the
/// message they carry.
#[derive(Error, Debug)]
pub enum Error {
    /// Leading-space count is not a multiple of two.
    #[error("odd indentation (must be a multiple of two spaces):\n '{line}'")]
    OddIndentation { line: String },

    /// `value` statement without `is` at token position 2.
    #[error("value statement must include 'is' to initialise it with a value")]
    ValueWithoutIs,

    /// Assignment with more than a bare expression but no `from` marker.
    #[error("assign the result of a task using 'is from'")]
    AssignWithoutFrom,

    /// `when` statement with fewer than four tokens.
    #[error("when statement must specify a condition")]
    ConditionTooShort,

    /// `until` statement without `equals` introducing its limit.
    #[error("until statement must specify a limit with 'equals'")]
    UntilWithoutEquals,

    /// `run` statement with arguments not introduced by `with`.
    #[error("task arguments must be introduced with 'with'")]
    CallWithoutWith,

    /// `log` statement without a single-quoted literal.
    #[error(
        "log must be passed a string in single quotes, \
         which may include template values with {{ and }}"
    )]
    LogWithoutLiteral,

    /// `task` statement with tokens after the name but no `gets` marker.
    #[error("task parameters must follow the task name with 'gets'")]
    TaskWithoutGets,

    /// `property` statement without `is` at token position 3.
    #[error("property statement must include 'is' before the assigned value")]
    PropertyWithoutIs,

    /// `using` statement naming a library outside the registry.
    #[error("unknown library '{name}', valid libraries are: {valid}")]
    UnknownLibrary { name: String, valid: String },

    /// No statement kind claimed the line.
    #[error("invalid statement: {statement}")]
    InvalidStatement { statement: String },

    /// Any of the above, tagged with its 1-based source line number.
    #[error("line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Tag this error with the 1-based line number it occurred on.
    pub fn at_line(self, line: usize) -> Error {
        Error::AtLine {
            line,
            source: Box::new(self),
        }
    }
}
