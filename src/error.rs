//! Error types for the colorramp library.

use thiserror::Error;

/// The error type for all fallible color operations.
///
/// These are programming or configuration errors, raised synchronously to the
/// caller; nothing is retried and no partial results are produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// An argument was outside the documented domain of an operation.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// What was wrong with the input.
        message: String,
    },

    /// A combination of arguments violates an interpolation constraint.
    #[error("constraint violation: {message}")]
    ConstraintViolation {
        /// The constraint that was violated.
        message: String,
    },

    /// A color map name did not resolve against any known table.
    #[error("Color map name not known: {0}")]
    UnknownColorMap(String),
}

/// Convenience type alias for Results with [`ColorError`].
pub type Result<T> = std::result::Result<T, ColorError>;
