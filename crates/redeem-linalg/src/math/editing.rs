//! In-place structural edits: identity/zero/diagonal fills, row and column
//! setters and getters, elementary row/column operations and transposition.
use crate::error::{MatrixError, Result};
use crate::math::matrix::Matrix;
use crate::math::scalar::Scalar;

impl<T: Scalar> Matrix<T> {
    /// Turns a square matrix into the identity.
    pub fn set_identity(&mut self) -> Result<()> {
        self.check_square()?;
        self.set_zero();
        for i in 0..self.rows {
            let offset = self.offset(i, i);
            self.data[offset] = T::one();
        }
        Ok(())
    }

    pub fn set_zero(&mut self) {
        self.data.fill(T::zero());
    }

    /// Zeroes a square matrix and writes `values` along its diagonal.
    pub fn set_diag(&mut self, values: &[T]) -> Result<()> {
        self.check_square()?;
        check_len(values, self.rows)?;
        self.set_zero();
        for (i, &value) in values.iter().enumerate() {
            let offset = self.offset(i, i);
            self.data[offset] = value;
        }
        Ok(())
    }

    pub fn fill_row(&mut self, row: usize, value: T) -> Result<()> {
        self.check_row(row)?;
        let start = self.offset(row, 0);
        self.data[start..start + self.cols].fill(value);
        Ok(())
    }

    pub fn set_row(&mut self, row: usize, values: &[T]) -> Result<()> {
        check_len(values, self.cols)?;
        self.check_row(row)?;
        let start = self.offset(row, 0);
        self.data[start..start + self.cols].copy_from_slice(values);
        Ok(())
    }

    pub fn fill_col(&mut self, col: usize, value: T) -> Result<()> {
        self.check_col(col)?;
        for row in 0..self.rows {
            let offset = self.offset(row, col);
            self.data[offset] = value;
        }
        Ok(())
    }

    pub fn set_col(&mut self, col: usize, values: &[T]) -> Result<()> {
        check_len(values, self.rows)?;
        self.check_col(col)?;
        for (row, &value) in values.iter().enumerate() {
            let offset = self.offset(row, col);
            self.data[offset] = value;
        }
        Ok(())
    }

    /// Copy of row `row`.
    pub fn get_row(&self, row: usize) -> Result<Vec<T>> {
        Ok(self.row_slice(row)?.to_vec())
    }

    /// Copy of column `col`.
    pub fn get_col(&self, col: usize) -> Result<Vec<T>> {
        self.check_col(col)?;
        Ok((0..self.rows)
            .map(|row| self.data[self.offset(row, col)])
            .collect())
    }

    pub fn swap_rows(&mut self, lhs: usize, rhs: usize) -> Result<()> {
        self.check_row(lhs)?;
        self.check_row(rhs)?;
        if lhs != rhs {
            for col in 0..self.cols {
                let (a, b) = (self.offset(lhs, col), self.offset(rhs, col));
                self.data.swap(a, b);
            }
        }
        Ok(())
    }

    pub fn swap_cols(&mut self, lhs: usize, rhs: usize) -> Result<()> {
        self.check_col(lhs)?;
        self.check_col(rhs)?;
        if lhs != rhs {
            for row in 0..self.rows {
                let (a, b) = (self.offset(row, lhs), self.offset(row, rhs));
                self.data.swap(a, b);
            }
        }
        Ok(())
    }

    pub fn mul_row(&mut self, row: usize, value: T) -> Result<()> {
        self.check_row(row)?;
        let start = self.offset(row, 0);
        for element in &mut self.data[start..start + self.cols] {
            *element *= value;
        }
        Ok(())
    }

    pub fn mul_col(&mut self, col: usize, value: T) -> Result<()> {
        self.check_col(col)?;
        for row in 0..self.rows {
            let offset = self.offset(row, col);
            self.data[offset] *= value;
        }
        Ok(())
    }

    /// `row[dst] += value * row[src]`.
    ///
    /// An exact zero `value` leaves the matrix untouched. With `dst == src`
    /// the row is scaled by `value + 1`.
    pub fn add_row(&mut self, dst: usize, src: usize, value: T) -> Result<()> {
        self.check_row(dst)?;
        self.check_row(src)?;
        if value.is_exact_zero() {
            return Ok(());
        }
        if dst == src {
            return self.mul_row(dst, value + T::one());
        }
        for col in 0..self.cols {
            let addend = value * self.data[self.offset(src, col)];
            let offset = self.offset(dst, col);
            self.data[offset] += addend;
        }
        Ok(())
    }

    /// `col[dst] += value * col[src]`, with the same special cases as
    /// [`Matrix::add_row`].
    pub fn add_col(&mut self, dst: usize, src: usize, value: T) -> Result<()> {
        self.check_col(dst)?;
        self.check_col(src)?;
        if value.is_exact_zero() {
            return Ok(());
        }
        if dst == src {
            return self.mul_col(dst, value + T::one());
        }
        for row in 0..self.rows {
            let addend = value * self.data[self.offset(row, src)];
            let offset = self.offset(row, dst);
            self.data[offset] += addend;
        }
        Ok(())
    }

    /// Transposes in place, swapping `rows` and `cols` and re-laying out the
    /// buffer in the new row-major order.
    pub fn transpose(&mut self) {
        log::trace!("transposing ({}, {}) matrix", self.rows, self.cols);
        let (rows, cols) = (self.rows, self.cols);
        let mut transposed = Vec::with_capacity(self.data.len());
        for col in 0..cols {
            for row in 0..rows {
                transposed.push(self.data[row * cols + col]);
            }
        }
        self.data = transposed;
        self.rows = cols;
        self.cols = rows;
    }

    pub fn transposed(&self) -> Matrix<T> {
        let mut result = self.clone();
        result.transpose();
        result
    }
}

fn check_len<T>(values: &[T], expected: usize) -> Result<()> {
    if values.len() != expected {
        return Err(MatrixError::SizeMismatch {
            expected,
            found: values.len(),
        });
    }
    Ok(())
}
