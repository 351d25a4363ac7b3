//! Conversions between [`SparseMatrix`] and the `nalgebra_sparse` formats.

use nalgebra_sparse::{CooMatrix, CsrMatrix};

use crate::NumericOps;

use super::{MatrixError, SparseMatrix};

impl<T: NumericOps> From<&SparseMatrix<T>> for CooMatrix<T> {
    fn from(matrix: &SparseMatrix<T>) -> Self {
        let mut coo = CooMatrix::new(matrix.rows(), matrix.cols());
        for element in matrix.iter() {
            coo.push(element.row(), element.col(), element.value());
        }
        coo
    }
}

impl<T> From<&SparseMatrix<T>> for CsrMatrix<T>
where
    T: NumericOps,
    CsrMatrix<T>: for<'a> From<&'a CooMatrix<T>>,
{
    fn from(matrix: &SparseMatrix<T>) -> Self {
        let coo: CooMatrix<T> = CooMatrix::from(matrix);
        CsrMatrix::from(&coo)
    }
}

/// Duplicate COO entries are summed and explicit zeros are dropped.
impl<T: NumericOps> TryFrom<&CooMatrix<T>> for SparseMatrix<T> {
    type Error = MatrixError;

    fn try_from(coo: &CooMatrix<T>) -> Result<Self, Self::Error> {
        let mut matrix = SparseMatrix::new(coo.nrows(), coo.ncols())?;
        for (row, col, &value) in coo.triplet_iter() {
            matrix.update(row, col, value, |acc, value| acc + value);
        }
        Ok(matrix)
    }
}

/// Explicitly stored zeros are dropped.
impl<T: NumericOps> TryFrom<&CsrMatrix<T>> for SparseMatrix<T> {
    type Error = MatrixError;

    fn try_from(csr: &CsrMatrix<T>) -> Result<Self, Self::Error> {
        let mut matrix = SparseMatrix::new(csr.nrows(), csr.ncols())?;
        for (row, col, &value) in csr.triplet_iter() {
            matrix.store(row, col, value);
        }
        Ok(matrix)
    }
}
