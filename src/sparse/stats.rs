use std::ops::AddAssign;

use anyhow::anyhow;
use num_traits::{NumCast, PrimInt, Unsigned, Zero};

use crate::{FloatOps, NumericOps};

use super::{MatrixNonZero, MatrixSum, SparseMatrix};

fn convert_counts<T>(counts: Vec<usize>) -> anyhow::Result<Vec<T>>
where
    T: PrimInt + Unsigned + Zero + AddAssign,
{
    counts
        .into_iter()
        .map(|count| T::from(count).ok_or_else(|| anyhow!("Failed to convert to target type")))
        .collect()
}

/// Adds each count onto the matching slot of `reference`, skipping lines
/// beyond its length.
fn accumulate_counts<T>(counts: Vec<usize>, reference: &mut [T]) -> anyhow::Result<()>
where
    T: PrimInt + Unsigned + Zero + AddAssign,
{
    for (slot, count) in reference.iter_mut().zip(counts) {
        let count_transformed =
            T::from(count).ok_or_else(|| anyhow!("Failed to convert to target type"))?;
        *slot = slot
            .checked_add(&count_transformed)
            .ok_or_else(|| anyhow!("Non-zero count overflows target type"))?;
    }
    Ok(())
}

fn convert_value<M: NumCast + Copy, T: FloatOps>(value: M) -> anyhow::Result<T> {
    T::from(value).ok_or_else(|| anyhow!("Numeric conversion failed"))
}

impl<M: NumericOps> SparseMatrix<M> {
    fn counts_per_row(&self) -> Vec<usize> {
        let mut counts = vec![0; self.rows()];
        for element in self.iter() {
            counts[element.row()] += 1;
        }
        counts
    }

    fn counts_per_col(&self) -> Vec<usize> {
        let mut counts = vec![0; self.cols()];
        for element in self.iter() {
            counts[element.col()] += 1;
        }
        counts
    }
}

impl<M: NumericOps> MatrixNonZero for SparseMatrix<M> {
    fn nonzero_col<T>(&self) -> anyhow::Result<Vec<T>>
    where
        T: PrimInt + Unsigned + Zero + AddAssign,
    {
        convert_counts(self.counts_per_col())
    }

    fn nonzero_row<T>(&self) -> anyhow::Result<Vec<T>>
    where
        T: PrimInt + Unsigned + Zero + AddAssign,
    {
        convert_counts(self.counts_per_row())
    }

    fn nonzero_col_chunk<T>(&self, reference: &mut [T]) -> anyhow::Result<()>
    where
        T: PrimInt + Unsigned + Zero + AddAssign,
    {
        accumulate_counts(self.counts_per_col(), reference)
    }

    fn nonzero_row_chunk<T>(&self, reference: &mut [T]) -> anyhow::Result<()>
    where
        T: PrimInt + Unsigned + Zero + AddAssign,
    {
        accumulate_counts(self.counts_per_row(), reference)
    }
}

impl<M: NumericOps + NumCast> MatrixSum for SparseMatrix<M> {
    type Item = M;

    fn sum_col<T>(&self) -> anyhow::Result<Vec<T>>
    where
        T: FloatOps + AddAssign,
    {
        let mut result = vec![T::zero(); self.cols()];
        self.sum_col_chunk(&mut result)?;
        Ok(result)
    }

    fn sum_row<T>(&self) -> anyhow::Result<Vec<T>>
    where
        T: FloatOps + AddAssign,
    {
        let mut result = vec![T::zero(); self.rows()];
        self.sum_row_chunk(&mut result)?;
        Ok(result)
    }

    fn sum_col_chunk<T>(&self, reference: &mut [T]) -> anyhow::Result<()>
    where
        T: FloatOps + AddAssign,
    {
        for element in self.iter() {
            if element.col() < reference.len() {
                let value: T = convert_value(element.value())?;
                reference[element.col()] += value;
            }
        }
        Ok(())
    }

    fn sum_row_chunk<T>(&self, reference: &mut [T]) -> anyhow::Result<()>
    where
        T: FloatOps + AddAssign,
    {
        for element in self.iter() {
            if element.row() < reference.len() {
                let value: T = convert_value(element.value())?;
                reference[element.row()] += value;
            }
        }
        Ok(())
    }
}
