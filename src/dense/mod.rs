use std::fmt;

use ndarray::{Array2, ArrayView2};

use crate::sparse::{Result, SparseMatrix};
use crate::NumericOps;

impl<T: NumericOps> SparseMatrix<T> {
    /// Dense copy of the matrix with zeros filled in.
    pub fn to_dense(&self) -> Array2<T> {
        let mut dense = Array2::from_elem(self.shape(), T::zero());
        for element in self.iter() {
            dense[[element.row(), element.col()]] = element.value();
        }
        dense
    }

    /// Sparse copy of a dense array, keeping only its non-zero entries.
    pub fn from_dense(dense: ArrayView2<'_, T>) -> Result<Self> {
        let (rows, cols) = dense.dim();
        let mut matrix = Self::new(rows, cols)?;
        for ((row, col), &value) in dense.indexed_iter() {
            matrix.store(row, col, value);
        }
        Ok(matrix)
    }
}

impl<T: NumericOps> From<&SparseMatrix<T>> for Array2<T> {
    fn from(matrix: &SparseMatrix<T>) -> Self {
        matrix.to_dense()
    }
}

/// Renders the dense view, one bracketed row per line. A precision given in
/// the format string (`{:.2}`) is applied to every entry.
impl<T: NumericOps + fmt::Display> fmt::Display for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            write!(f, "[")?;
            for col in 0..self.cols() {
                if col > 0 {
                    write!(f, ", ")?;
                }
                let value = self.value_at(row, col);
                match f.precision() {
                    Some(precision) => write!(f, "{value:.precision$}")?,
                    None => write!(f, "{value}")?,
                }
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
