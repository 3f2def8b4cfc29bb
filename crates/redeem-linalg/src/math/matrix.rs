use std::mem;
use std::ops::{Index, IndexMut};
use std::slice::Iter;

use num_traits::NumCast;

use crate::error::{Axis, MatrixError, Result};
use crate::math::scalar::Scalar;

/// Dense, row-major matrix over a built-in numeric type.
///
/// Element `(r, c)` lives at offset `r * cols + c` of a single contiguous
/// buffer, and `data.len() == rows * cols` always holds. The only valid shape
/// with a zero extent is the empty `0 x 0` matrix.
#[derive(Clone, Debug)]
pub struct Matrix<T> {
    pub(crate) data: Vec<T>,
    pub(crate) rows: usize,
    pub(crate) cols: usize,
}

impl<T: Scalar> Matrix<T> {
    /// The empty `0 x 0` matrix.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            rows: 0,
            cols: 0,
        }
    }

    /// A `rows x cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::from_elem(rows, cols, T::zero())
    }

    /// A `rows x cols` matrix with every element set to `value`.
    ///
    /// A shape that passes validation but cannot be allocated fails with
    /// [`MatrixError::AllocationFailed`].
    pub fn from_elem(rows: usize, cols: usize, value: T) -> Result<Self> {
        check_shape::<T>(rows, cols)?;
        let len = rows * cols;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| MatrixError::AllocationFailed { rows, cols })?;
        data.resize(len, value);
        Ok(Self { data, rows, cols })
    }

    /// Builds a matrix from a row-major buffer of exactly `rows * cols` values.
    pub fn from_shape_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        check_shape::<T>(rows, cols)?;
        if data.len() != rows * cols {
            return Err(MatrixError::InvalidArgument(format!(
                "buffer of length {} cannot fill a ({}, {}) matrix",
                data.len(),
                rows,
                cols
            )));
        }
        Ok(Self { data, rows, cols })
    }

    /// Builds a matrix from nested rows, e.g. `&[[1, 2], [3, 4]]`.
    ///
    /// The column count is taken from the first row; every other row must
    /// have the same length.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self>
    where
        R: AsRef<[T]>,
    {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |row| row.as_ref().len());

        let mut data = Vec::with_capacity(n_rows * n_cols);
        for (idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n_cols {
                return Err(MatrixError::InvalidArgument(format!(
                    "row {} has {} elements, expected {}",
                    idx,
                    row.len(),
                    n_cols
                )));
            }
            data.extend_from_slice(row);
        }

        Self::from_shape_vec(n_rows, n_cols, data)
    }

    /// The `n x n` identity matrix.
    pub fn identity(n: usize) -> Result<Self> {
        let mut matrix = Self::zeros(n, n)?;
        for i in 0..n {
            matrix.data[i * n + i] = T::one();
        }
        Ok(matrix)
    }

    /// A square matrix with `values` along the main diagonal.
    pub fn from_diag(values: &[T]) -> Result<Self> {
        let mut matrix = Self::zeros(values.len(), values.len())?;
        matrix.set_diag(values)?;
        Ok(matrix)
    }

    /// Moves the contents out, leaving `self` as the empty `0 x 0` matrix.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Converts every element to `U`.
    ///
    /// Fails with [`MatrixError::InvalidArgument`] if an element is not
    /// representable in `U`.
    pub fn cast<U: Scalar>(&self) -> Result<Matrix<U>> {
        let data = self
            .data
            .iter()
            .map(|&value| {
                <U as NumCast>::from(value).ok_or_else(|| {
                    MatrixError::InvalidArgument(format!(
                        "element {} is not representable in the target type",
                        value
                    ))
                })
            })
            .collect::<Result<Vec<U>>>()?;
        Ok(Matrix {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn element_count(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// `true` if every element equals zero under [`Scalar::approx_eq`].
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|value| value.approx_eq(T::zero()))
    }

    /// Largest number of elements a matrix of `T` can address.
    pub fn max_rows(&self) -> usize {
        max_elements::<T>()
    }

    /// Largest column count for the current number of rows.
    pub fn max_cols(&self) -> usize {
        max_cols_for::<T>(self.rows)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    #[inline]
    pub(crate) fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub(crate) fn check_row(&self, row: usize) -> Result<()> {
        if row < self.rows {
            Ok(())
        } else {
            Err(MatrixError::OutOfRange {
                axis: Axis::Row,
                index: row,
                extent: self.rows,
            })
        }
    }

    pub(crate) fn check_col(&self, col: usize) -> Result<()> {
        if col < self.cols {
            Ok(())
        } else {
            Err(MatrixError::OutOfRange {
                axis: Axis::Col,
                index: col,
                extent: self.cols,
            })
        }
    }

    pub(crate) fn check_square(&self) -> Result<()> {
        if self.is_square() {
            Ok(())
        } else {
            Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Bounds-checked element access.
    pub fn at(&self, row: usize, col: usize) -> Result<&T> {
        self.check_row(row)?;
        self.check_col(col)?;
        Ok(&self.data[self.offset(row, col)])
    }

    /// Bounds-checked mutable element access.
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        self.check_row(row)?;
        self.check_col(col)?;
        let offset = self.offset(row, col);
        Ok(&mut self.data[offset])
    }

    /// Borrows row `row` as a slice.
    pub fn row_slice(&self, row: usize) -> Result<&[T]> {
        self.check_row(row)?;
        let start = self.offset(row, 0);
        Ok(&self.data[start..start + self.cols])
    }

    /// Named form of `==`.
    pub fn equals(&self, other: &Matrix<T>) -> bool {
        self == other
    }
}

impl<T: Scalar> Default for Matrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Unchecked access: the offset `row * cols + col` is used as is. Coordinates
/// past the end of the buffer panic; other out-of-range coordinates alias a
/// different element.
impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.data[index.0 * self.cols + index.1]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let offset = index.0 * self.cols + index.1;
        &mut self.data[offset]
    }
}

impl<T: Scalar> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        if self.shape() != other.shape() {
            return false;
        }
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(&lhs, &rhs)| lhs.approx_eq(rhs))
    }
}

impl<'a, T> IntoIterator for &'a Matrix<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

pub(crate) fn max_elements<T>() -> usize {
    isize::MAX as usize / mem::size_of::<T>().max(1)
}

pub(crate) fn max_cols_for<T>(rows: usize) -> usize {
    if rows == 0 {
        max_elements::<T>()
    } else {
        max_elements::<T>() / rows
    }
}

/// Validates a `(rows, cols)` pair for construction.
pub(crate) fn check_shape<T>(rows: usize, cols: usize) -> Result<()> {
    let valid = if rows == 0 {
        cols == 0
    } else {
        rows < max_elements::<T>() && cols > 0 && cols < max_cols_for::<T>(rows)
    };
    if valid {
        Ok(())
    } else {
        Err(MatrixError::InvalidShape { rows, cols })
    }
}
