use crate::NumericOps;

/// A stored non-zero entry of a [`SparseMatrix`](super::SparseMatrix).
///
/// The position is fixed once the element is inserted; moving an entry is a
/// removal followed by an insertion. The value can only be changed by the
/// owning matrix, which keeps it non-zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixElement<T> {
    row: usize,
    col: usize,
    value: T,
}

impl<T: NumericOps> MatrixElement<T> {
    pub(crate) fn new(row: usize, col: usize, value: T) -> Self {
        MatrixElement { row, col, value }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn value(&self) -> T {
        self.value
    }

    /// `(row, col, value)` triple.
    pub fn triplet(&self) -> (usize, usize, T) {
        (self.row, self.col, self.value)
    }

    pub(crate) fn set_value(&mut self, value: T) {
        self.value = value;
    }

    pub(crate) fn scale_by(&mut self, scalar: T) {
        self.value = self.value * scalar;
    }
}
