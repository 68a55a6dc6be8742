//! Error types for Tessera.
//!
//! Uses `thiserror` for ergonomic error definition. There are two failure
//! types, kept apart on purpose:
//!
//! - [`CallError`] rejects a malformed call (wrong arity or argument kind)
//!   before the native function runs.
//! - [`Error`] covers object-protocol failures such as an operator that a
//!   variant pairing does not support.
//!
//! A native function that fails on its own terms does neither: it returns an
//! [`Object::Error`](crate::Object::Error) value through a successful call.

use std::fmt;

use thiserror::Error;

use crate::kind::ObjectKind;
use crate::ops::BinaryOperator;

/// Result type for object-protocol operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for object-protocol operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an invalid operator error.
    #[must_use]
    pub fn invalid_operator(op: BinaryOperator, lhs: ObjectKind, rhs: ObjectKind) -> Self {
        Self::new(ErrorKind::InvalidOperator { op, lhs, rhs })
    }

    /// Creates a division by zero error.
    #[must_use]
    pub fn division_by_zero() -> Self {
        Self::new(ErrorKind::DivisionByZero)
    }

    /// Creates an invalid shift count error.
    #[must_use]
    pub fn invalid_shift(count: i64) -> Self {
        Self::new(ErrorKind::InvalidShift(count))
    }

    /// Creates an index out of bounds error.
    #[must_use]
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        Self::new(ErrorKind::IndexOutOfBounds { index, length })
    }

    /// Returns true if this is an invalid operator error.
    #[must_use]
    pub fn is_invalid_operator(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidOperator { .. })
    }
}

impl From<CallError> for Error {
    fn from(err: CallError) -> Self {
        Self::new(ErrorKind::Call(err))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The operator is not defined for this pairing of variants.
    #[error("invalid operator: {lhs} {op} {rhs}")]
    InvalidOperator {
        /// The operator that was applied.
        op: BinaryOperator,
        /// Kind of the left-hand side.
        lhs: ObjectKind,
        /// Kind of the right-hand side.
        rhs: ObjectKind,
    },

    /// Integer division or remainder by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Shift by a negative count.
    #[error("invalid shift count: {0}")]
    InvalidShift(i64),

    /// Index out of bounds.
    #[error("index out of bounds: {index} (length {length})")]
    IndexOutOfBounds {
        /// The index that was accessed.
        index: usize,
        /// The actual length of the collection.
        length: usize,
    },

    /// A calling-convention failure surfaced through the general error type.
    #[error(transparent)]
    Call(CallError),
}

/// Rejection of a call because of how it was made.
///
/// Returned by [`Callable::call`](crate::Callable::call) when the argument
/// list does not fit the callee's signature. The native function is never
/// reached when one of these is produced.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CallError {
    /// Too few or too many arguments.
    #[error("wrong number of arguments: expected {expected}, got {found}")]
    WrongNumArguments {
        /// Number of parameters the callee declares.
        expected: usize,
        /// Number of arguments supplied.
        found: usize,
    },

    /// An argument is not the variant its parameter requires.
    #[error("invalid type for argument {position}: expected {expected}, found {found}")]
    InvalidArgumentType {
        /// Zero-based position of the offending argument.
        position: usize,
        /// Kind the parameter requires.
        expected: ObjectKind,
        /// Kind that was supplied.
        found: ObjectKind,
    },
}

impl CallError {
    /// Creates an arity failure.
    #[must_use]
    pub const fn wrong_num_arguments(expected: usize, found: usize) -> Self {
        Self::WrongNumArguments { expected, found }
    }

    /// Creates an argument type failure.
    #[must_use]
    pub const fn invalid_argument_type(
        position: usize,
        expected: ObjectKind,
        found: ObjectKind,
    ) -> Self {
        Self::InvalidArgumentType {
            position,
            expected,
            found,
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Name of the function or module being evaluated.
    pub source: Option<String>,
    /// Stack of builtin calls leading to the error.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source name.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "in {source}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  called from {frame}")?;
            }
        }
        Ok(())
    }
}
