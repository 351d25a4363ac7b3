use std::ops::{Add, Mul, Neg, Sub};

use log::debug;

use crate::NumericOps;

use super::{MatrixError, Operation, Result, SparseMatrix};

#[allow(clippy::should_implement_trait)]
impl<T: NumericOps> SparseMatrix<T> {
    fn check_same_shape(&self, other: &Self, op: Operation) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(MatrixError::ShapeMismatch {
                op,
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        Ok(())
    }

    /// Element-wise combination of two equally shaped matrices. The result
    /// starts as a copy of `self` and each element of `other` is folded in
    /// through `combine`, so entries that cancel out are dropped.
    fn combine_with<F>(&self, other: &Self, op: Operation, combine: F) -> Result<Self>
    where
        F: Fn(T, T) -> T,
    {
        self.check_same_shape(other, op)?;
        debug!(
            "{}: {}x{} ({} nnz) with {} nnz",
            op,
            self.rows(),
            self.cols(),
            self.nnz(),
            other.nnz()
        );

        let mut result = self.clone();
        for element in other.iter() {
            result.update(element.row(), element.col(), element.value(), &combine);
        }
        Ok(result)
    }

    /// `self + other`
    ///
    /// Fails with [`MatrixError::ShapeMismatch`] unless both matrices have the
    /// same extent. Entry arithmetic is that of `T`, overflow included.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.combine_with(other, Operation::Add, |lhs, rhs| lhs + rhs)
    }

    /// `self - other`
    ///
    /// Fails with [`MatrixError::ShapeMismatch`] unless both matrices have the
    /// same extent.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.combine_with(other, Operation::Sub, |lhs, rhs| lhs - rhs)
    }

    /// Matrix product `self * other`, of extent `self.rows() x other.cols()`.
    ///
    /// Every stored `(i, k)` of `self` is paired with the stored elements of
    /// row `k` of `other`. Fails with [`MatrixError::ShapeMismatch`] when
    /// `self.cols() != other.rows()`.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.cols() != other.rows() {
            return Err(MatrixError::ShapeMismatch {
                op: Operation::Multiply,
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        debug!(
            "{}: {}x{} ({} nnz) by {}x{} ({} nnz)",
            Operation::Multiply,
            self.rows(),
            self.cols(),
            self.nnz(),
            other.rows(),
            other.cols(),
            other.nnz()
        );

        let mut result = Self::with_shape(self.rows(), other.cols());
        for lhs in self.iter() {
            for rhs in other.row_elements(lhs.col()) {
                result.update(lhs.row(), rhs.col(), lhs.value() * rhs.value(), |acc, product| {
                    acc + product
                });
            }
        }
        Ok(result)
    }
}

impl<T: NumericOps> Add<&SparseMatrix<T>> for &SparseMatrix<T> {
    type Output = Result<SparseMatrix<T>>;

    fn add(self, rhs: &SparseMatrix<T>) -> Self::Output {
        SparseMatrix::add(self, rhs)
    }
}

impl<T: NumericOps> Sub<&SparseMatrix<T>> for &SparseMatrix<T> {
    type Output = Result<SparseMatrix<T>>;

    fn sub(self, rhs: &SparseMatrix<T>) -> Self::Output {
        SparseMatrix::sub(self, rhs)
    }
}

impl<T: NumericOps> Mul<&SparseMatrix<T>> for &SparseMatrix<T> {
    type Output = Result<SparseMatrix<T>>;

    fn mul(self, rhs: &SparseMatrix<T>) -> Self::Output {
        self.multiply(rhs)
    }
}

impl<T> Neg for &SparseMatrix<T>
where
    T: NumericOps + Neg<Output = T>,
{
    type Output = SparseMatrix<T>;

    fn neg(self) -> Self::Output {
        let mut result = SparseMatrix::with_shape(self.rows(), self.cols());
        for element in self.iter() {
            result.store(element.row(), element.col(), -element.value());
        }
        result
    }
}

// `scalar * &matrix` for the primitive numeric types
macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<&SparseMatrix<$t>> for $t {
                type Output = SparseMatrix<$t>;

                fn mul(self, rhs: &SparseMatrix<$t>) -> Self::Output {
                    rhs.scaled(self)
                }
            }
        )*
    };
}

impl_scalar_mul!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Equality over the full logical matrix: same extent and the same value at
/// every position. Since zeros are never stored this holds exactly when both
/// matrices store the same number of elements and every element of `self`
/// is matched at the same position in `other`.
impl<T: NumericOps> PartialEq for SparseMatrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape()
            && self.nnz() == other.nnz()
            && self
                .iter()
                .all(|element| other.value_at(element.row(), element.col()) == element.value())
    }
}

impl<T: NumericOps + Eq> Eq for SparseMatrix<T> {}
