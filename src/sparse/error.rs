//! Error types for sparse matrix operations

use std::fmt;

use thiserror::Error;

/// Result type alias using [`MatrixError`]
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Binary operation that rejected its operands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Sub,
    Multiply,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Add => "addition",
            Operation::Sub => "subtraction",
            Operation::Multiply => "multiplication",
        };
        write!(f, "{name}")
    }
}

/// Errors that can occur in sparse matrix operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Position outside the matrix extent
    #[error("Position ({row}, {col}) out of range for a {rows}x{cols} matrix")]
    OutOfRange {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Number of rows of the matrix
        rows: usize,
        /// Number of columns of the matrix
        cols: usize,
    },

    /// Operand extents incompatible for a binary operation
    #[error("Matrix sizes not compatible for {op}: {lhs:?} and {rhs:?}")]
    ShapeMismatch {
        /// The rejected operation
        op: Operation,
        /// Extent of the left operand
        lhs: (usize, usize),
        /// Extent of the right operand
        rhs: (usize, usize),
    },

    /// Matrix extent with zero rows or columns
    #[error("Invalid matrix shape {rows}x{cols}: both extents must be positive")]
    InvalidShape {
        /// Requested number of rows
        rows: usize,
        /// Requested number of columns
        cols: usize,
    },
}
