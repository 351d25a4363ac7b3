use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::ops::AddAssign;

use log::trace;
use num_traits::{NumCast, PrimInt, Unsigned, Zero};

use crate::{Direction, FloatOps, NumericOps};

mod convert;
mod element;
mod error;
mod ops;
mod stats;

pub use element::MatrixElement;
pub use error::{MatrixError, Operation, Result};

pub trait MatrixNonZero {
    fn nonzero_col<T>(&self) -> anyhow::Result<Vec<T>>
    where
        T: PrimInt + Unsigned + Zero + AddAssign;

    fn nonzero_row<T>(&self) -> anyhow::Result<Vec<T>>
    where
        T: PrimInt + Unsigned + Zero + AddAssign;

    fn nonzero_col_chunk<T>(&self, reference: &mut [T]) -> anyhow::Result<()>
    where
        T: PrimInt + Unsigned + Zero + AddAssign;

    fn nonzero_row_chunk<T>(&self, reference: &mut [T]) -> anyhow::Result<()>
    where
        T: PrimInt + Unsigned + Zero + AddAssign;

    /// Non-zero counts along the given direction
    fn nonzero<T>(&self, direction: &Direction) -> anyhow::Result<Vec<T>>
    where
        T: PrimInt + Unsigned + Zero + AddAssign,
    {
        match direction {
            Direction::Row => self.nonzero_row(),
            Direction::Column => self.nonzero_col(),
        }
    }
}

pub trait MatrixSum {
    type Item: NumCast;

    fn sum_col<T>(&self) -> anyhow::Result<Vec<T>>
    where
        T: FloatOps + AddAssign;

    fn sum_row<T>(&self) -> anyhow::Result<Vec<T>>
    where
        T: FloatOps + AddAssign;

    fn sum_col_chunk<T>(&self, reference: &mut [T]) -> anyhow::Result<()>
    where
        T: FloatOps + AddAssign;

    fn sum_row_chunk<T>(&self, reference: &mut [T]) -> anyhow::Result<()>
    where
        T: FloatOps + AddAssign;

    /// Sums along the given direction
    fn sum<T>(&self, direction: &Direction) -> anyhow::Result<Vec<T>>
    where
        T: FloatOps + AddAssign,
    {
        match direction {
            Direction::Row => self.sum_row(),
            Direction::Column => self.sum_col(),
        }
    }
}

/// A matrix of fixed extent that stores only its non-zero entries.
///
/// Every position inside the extent logically holds a value; positions without
/// a stored [`MatrixElement`] read as zero. Writing zero to a position removes
/// its element, so no explicit zeros are ever stored.
///
/// Elements are keyed by `(row, col)` and iterate in row-major order.
#[derive(Debug, Clone)]
pub struct SparseMatrix<T> {
    rows: usize,
    cols: usize,
    elements: BTreeMap<(usize, usize), MatrixElement<T>>,
}

impl<T: NumericOps> SparseMatrix<T> {
    /// Creates a `rows x cols` matrix with every entry zero.
    ///
    /// Fails with [`MatrixError::InvalidShape`] if either extent is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidShape { rows, cols });
        }
        Ok(Self::with_shape(rows, cols))
    }

    /// Extent must already be validated.
    pub(crate) fn with_shape(rows: usize, cols: usize) -> Self {
        SparseMatrix {
            rows,
            cols,
            elements: BTreeMap::new(),
        }
    }

    /// The `n x n` identity matrix.
    pub fn identity(n: usize) -> Result<Self> {
        let mut matrix = Self::new(n, n)?;
        for i in 0..n {
            matrix.store(i, i, T::one());
        }
        Ok(matrix)
    }

    /// Builds a matrix by writing each `(row, col, value)` triplet in order.
    ///
    /// Later triplets overwrite earlier ones at the same position, and zero
    /// values leave the position empty. The first out-of-range triplet aborts
    /// construction.
    pub fn from_triplets<I>(rows: usize, cols: usize, triplets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut matrix = Self::new(rows, cols)?;
        for (row, col, value) in triplets {
            matrix.set(row, col, value)?;
        }
        Ok(matrix)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of stored (non-zero) elements.
    pub fn nnz(&self) -> usize {
        self.elements.len()
    }

    /// Whether every entry of the matrix is zero.
    pub fn is_zero(&self) -> bool {
        self.elements.is_empty()
    }

    /// Stored elements in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &MatrixElement<T>> + '_ {
        self.elements.values()
    }

    /// Removes every stored element, keeping the extent.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    fn check_position(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Value at `(row, col)`, zero if nothing is stored there.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.check_position(row, col)?;
        Ok(self.value_at(row, col))
    }

    /// Writes `value` at `(row, col)`.
    ///
    /// A non-zero value updates or inserts the element, zero removes it.
    /// Nothing is modified when the position is out of range.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.check_position(row, col)?;
        self.store(row, col, value);
        Ok(())
    }

    /// Unchecked read; the position must be inside the extent.
    pub(crate) fn value_at(&self, row: usize, col: usize) -> T {
        self.elements
            .get(&(row, col))
            .map_or_else(T::zero, MatrixElement::value)
    }

    /// Unchecked write; the position must be inside the extent.
    pub(crate) fn store(&mut self, row: usize, col: usize, value: T) {
        match self.elements.entry((row, col)) {
            Entry::Occupied(mut entry) => {
                if value.is_zero() {
                    trace!("removing element ({}, {})", row, col);
                    entry.remove();
                } else {
                    entry.get_mut().set_value(value);
                }
            }
            Entry::Vacant(entry) => {
                if !value.is_zero() {
                    trace!("inserting element ({}, {})", row, col);
                    entry.insert(MatrixElement::new(row, col, value));
                }
            }
        }
    }

    /// Read-modify-write of `(row, col)` through `combine(current, operand)`.
    pub(crate) fn update<F>(&mut self, row: usize, col: usize, operand: T, combine: F)
    where
        F: FnOnce(T, T) -> T,
    {
        let current = self.value_at(row, col);
        self.store(row, col, combine(current, operand));
    }

    /// Stored elements of one row, in column order.
    pub(crate) fn row_elements(&self, row: usize) -> impl Iterator<Item = &MatrixElement<T>> + '_ {
        self.elements
            .range((row, 0)..=(row, usize::MAX))
            .map(|(_, element)| element)
    }

    /// Multiplies every entry by `scalar` in place.
    ///
    /// Scaling by zero empties the matrix. Entries whose product is zero
    /// (float underflow, or wrap-around for a wrapping scalar type such as
    /// [`std::num::Wrapping`]) are removed as well. Overflow follows the
    /// scalar type's own arithmetic, so plain integers panic in debug builds.
    pub fn scale_by(&mut self, scalar: T) {
        if scalar.is_zero() {
            trace!("scaling by zero, clearing {} elements", self.nnz());
            self.elements.clear();
            return;
        }
        for element in self.elements.values_mut() {
            element.scale_by(scalar);
        }
        self.elements.retain(|_, element| !element.value().is_zero());
    }

    /// Copy of the matrix with every entry multiplied by `scalar`.
    pub fn scaled(&self, scalar: T) -> Self {
        let mut result = self.clone();
        result.scale_by(scalar);
        result
    }

    /// The `cols x rows` matrix with every entry mirrored across the diagonal.
    pub fn transpose(&self) -> Self {
        let mut result = Self::with_shape(self.cols, self.rows);
        for element in self.iter() {
            result.store(element.col(), element.row(), element.value());
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_matrix() -> SparseMatrix<i32> {
        // [5 0 0]
        // [0 0 7]
        SparseMatrix::from_triplets(2, 3, vec![(0, 0, 5), (1, 2, 7)]).unwrap()
    }

    #[test]
    fn test_new_is_empty() {
        let matrix: SparseMatrix<f64> = SparseMatrix::new(3, 4).unwrap();
        assert_eq!(matrix.shape(), (3, 4));
        assert_eq!(matrix.nnz(), 0);
        assert!(matrix.is_zero());
        for row in 0..3 {
            for col in 0..4 {
                assert_eq!(matrix.get(row, col).unwrap(), 0.0);
            }
        }
    }

    #[test]
    fn test_new_rejects_empty_extent() {
        assert_eq!(
            SparseMatrix::<f64>::new(0, 3).unwrap_err(),
            MatrixError::InvalidShape { rows: 0, cols: 3 }
        );
        assert!(SparseMatrix::<f64>::new(3, 0).is_err());
    }

    #[test]
    fn test_set_and_get() {
        let mut matrix = SparseMatrix::new(2, 2).unwrap();
        matrix.set(0, 1, 4.5).unwrap();
        assert_eq!(matrix.get(0, 1).unwrap(), 4.5);
        assert_eq!(matrix.nnz(), 1);

        // Overwrite keeps a single element
        matrix.set(0, 1, -2.0).unwrap();
        assert_eq!(matrix.get(0, 1).unwrap(), -2.0);
        assert_eq!(matrix.nnz(), 1);
    }

    #[test]
    fn test_set_zero_removes_element() {
        let mut matrix = create_test_matrix();
        assert_eq!(matrix.nnz(), 2);

        matrix.set(1, 2, 0).unwrap();
        assert_eq!(matrix.get(1, 2).unwrap(), 0);
        assert_eq!(matrix.nnz(), 1);

        // Zero on an empty position is a no-op
        matrix.set(1, 1, 0).unwrap();
        assert_eq!(matrix.nnz(), 1);
    }

    #[test]
    fn test_out_of_range() {
        let mut matrix = create_test_matrix();
        assert_eq!(
            matrix.get(2, 0).unwrap_err(),
            MatrixError::OutOfRange {
                row: 2,
                col: 0,
                rows: 2,
                cols: 3
            }
        );
        assert!(matrix.get(0, 3).is_err());

        let before = matrix.clone();
        assert!(matrix.set(0, 3, 9).is_err());
        assert!(matrix.set(5, 5, 9).is_err());
        assert_eq!(matrix, before);
    }

    #[test]
    fn test_from_triplets_overwrites_and_skips_zeros() {
        let matrix =
            SparseMatrix::from_triplets(2, 2, vec![(0, 0, 1), (0, 0, 3), (1, 1, 0)]).unwrap();
        assert_eq!(matrix.get(0, 0).unwrap(), 3);
        assert_eq!(matrix.nnz(), 1);

        assert!(SparseMatrix::from_triplets(2, 2, vec![(0, 0, 1), (2, 0, 1)]).is_err());
    }

    #[test]
    fn test_iter_row_major() {
        let matrix =
            SparseMatrix::from_triplets(3, 3, vec![(2, 0, 1), (0, 2, 2), (0, 1, 3), (1, 1, 4)])
                .unwrap();
        let triplets: Vec<_> = matrix.iter().map(MatrixElement::triplet).collect();
        assert_eq!(triplets, vec![(0, 1, 3), (0, 2, 2), (1, 1, 4), (2, 0, 1)]);

        let row: Vec<_> = matrix.row_elements(0).map(MatrixElement::col).collect();
        assert_eq!(row, vec![1, 2]);
        assert_eq!(matrix.row_elements(2).count(), 1);
    }

    #[test]
    fn test_scale_by() {
        let mut matrix = create_test_matrix();
        matrix.scale_by(3);
        assert_eq!(matrix.get(0, 0).unwrap(), 15);
        assert_eq!(matrix.get(1, 2).unwrap(), 21);
        assert_eq!(matrix.nnz(), 2);
    }

    #[test]
    fn test_scale_by_zero_clears() {
        let mut matrix = SparseMatrix::new(2, 2).unwrap();
        matrix.set(1, 0, 8.0).unwrap();
        matrix.scale_by(0.0);
        assert_eq!(matrix.nnz(), 0);
        for row in 0..2 {
            for col in 0..2 {
                assert_eq!(matrix.get(row, col).unwrap(), 0.0);
            }
        }
    }

    #[test]
    fn test_scale_by_underflow_drops_element() {
        let mut matrix = SparseMatrix::new(1, 2).unwrap();
        matrix.set(0, 0, 1e-200).unwrap();
        matrix.set(0, 1, 1.0).unwrap();
        matrix.scale_by(1e-200);
        assert_eq!(matrix.nnz(), 1);
        assert_eq!(matrix.get(0, 0).unwrap(), 0.0);
    }

    #[test]
    fn test_scaled_leaves_operand() {
        let matrix = create_test_matrix();
        let doubled = matrix.scaled(2);
        assert_eq!(doubled.get(1, 2).unwrap(), 14);
        assert_eq!(matrix.get(1, 2).unwrap(), 7);
    }

    #[test]
    fn test_identity() {
        let identity: SparseMatrix<i64> = SparseMatrix::identity(3).unwrap();
        assert_eq!(identity.nnz(), 3);
        assert_eq!(identity.get(2, 2).unwrap(), 1);
        assert_eq!(identity.get(0, 2).unwrap(), 0);
    }

    #[test]
    fn test_transpose() {
        let matrix = create_test_matrix();
        let transposed = matrix.transpose();
        assert_eq!(transposed.shape(), (3, 2));
        assert_eq!(transposed.get(2, 1).unwrap(), 7);
        assert_eq!(transposed.get(0, 0).unwrap(), 5);
        assert_eq!(transposed.nnz(), 2);
        assert_eq!(transposed.transpose(), matrix);
    }

    #[test]
    fn test_clear() {
        let mut matrix = create_test_matrix();
        matrix.clear();
        assert!(matrix.is_zero());
        assert_eq!(matrix.shape(), (2, 3));
    }
}
