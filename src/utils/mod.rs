use std::fmt::Debug;

use num_traits::{Float, Num};

/// Scalar types that can be stored in a [`SparseMatrix`](crate::sparse::SparseMatrix).
pub trait NumericOps: Num + Copy + Debug + Send + Sync + 'static {}

impl<T> NumericOps for T where T: Num + Copy + Debug + Send + Sync + 'static {}

/// Floating point scalars, used as the target type of the summary statistics.
pub trait FloatOps: NumericOps + Float {}

impl<T> FloatOps for T where T: NumericOps + Float {}

/// Axis along which per-line statistics are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Row,
    Column,
}
