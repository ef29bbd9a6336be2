//! Error types for parsing and resolving circuits

use std::fmt;

use itertools::Itertools;
use thiserror::Error;

/// Errors raised while reading, checking or resolving a circuit
#[derive(Debug, Error)]
pub enum Error {
    /// A text line does not have the expected single-delimiter shape
    #[error("line {line}: expected exactly one '{delimiter}' in `{text}`")]
    MalformedLine {
        /// 1-based line number
        line: usize,
        /// The delimiter that was expected once
        delimiter: char,
        /// The offending line
        text: String,
    },

    /// A value token is neither a boolean spelling nor an X marker
    #[error("invalid state token `{0}`")]
    InvalidToken(String),

    /// A gate call uses a function outside of the built-in set
    #[error("unknown gate function `{0}`")]
    UnknownGate(String),

    /// A gate call has the wrong number of operands
    #[error("gate {gate} takes {expected} operand(s), got {found}")]
    Arity {
        /// Name of the gate function
        gate: String,
        /// Number of operands the gate takes
        expected: usize,
        /// Number of operands given
        found: usize,
    },

    /// A signal name is defined more than once
    #[error("{0} is defined twice")]
    DuplicateDefinition(String),

    /// Operands of a binary gate have different widths
    #[error("operands of {name} have different widths ({left} vs {right})")]
    WidthMismatch {
        /// Output name of the gate
        name: String,
        /// Width of the first operand
        left: usize,
        /// Width of the second operand
        right: usize,
    },

    /// Some gates could not be resolved
    #[error("could not resolve all gates: {0}")]
    Unsatisfiable(Unsatisfiable),

    /// Error during file IO
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Cause of a resolution that made no progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unsatisfiable {
    /// A gate reads a signal that is neither an input nor a gate output
    Undefined {
        /// Output name of the gate
        gate: String,
        /// The missing operand
        operand: String,
    },
    /// The gates left unresolved, in declaration order; some of them form a cycle
    Cycle(Vec<String>),
}

impl Error {
    /// Returns whether the error comes from a stuck resolution
    pub fn is_unsatisfiable(&self) -> bool {
        matches!(self, Error::Unsatisfiable(_))
    }
}

impl fmt::Display for Unsatisfiable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unsatisfiable::Undefined { gate, operand } => {
                write!(f, "{gate} reads {operand}, which is not generated anywhere")
            }
            Unsatisfiable::Cycle(names) => {
                write!(f, "circular dependency between {}", names.iter().join(", "))
            }
        }
    }
}

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
