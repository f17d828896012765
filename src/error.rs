//! Defines preprocessing errors.

use std::io;

use crate::Label;

/// An error type for all preprocessing operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required input had no elements.
    #[error("{0} must not be empty")]
    Empty(&'static str),
    /// A matrix was requested with a zero-sized dimension.
    #[error("matrix dimensions must be non-zero (got {rows}x{cols})")]
    ZeroDimension {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
    /// Automatic encoding was asked for labels that are not the range `0..classes`.
    #[error("label {label} is outside the dense range 0..{classes}")]
    NotDense {
        /// The offending label.
        label: Label,
        /// Number of distinct labels seen.
        classes: usize,
    },
    /// A label had no code in the encoding rule.
    #[error("no encoding for label {0}")]
    MissingEncoding(Label),
    /// Rows or codes of unequal length, or a buffer of the wrong size.
    #[error("shape mismatch: expected {expected} elements, got {actual}")]
    ShapeMismatch {
        /// The length every row or code should have.
        expected: usize,
        /// The length that was found.
        actual: usize,
    },
    /// Writing diagnostic output failed.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// A specialized result for preprocessing operations.
pub type Result<T> = std::result::Result<T, Error>;
