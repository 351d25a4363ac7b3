//! A sparse matrix abstract data type.
//!
//! [`SparseMatrix`] stores only the non-zero entries of a fixed-size matrix and
//! supports checked element access, scaling, addition, subtraction,
//! multiplication and equality over the full logical matrix.

pub mod dense;
pub mod sparse;
mod utils;

pub use sparse::{MatrixElement, MatrixError, Operation, SparseMatrix};
pub use utils::Direction;
pub use utils::FloatOps;
pub use utils::NumericOps;
