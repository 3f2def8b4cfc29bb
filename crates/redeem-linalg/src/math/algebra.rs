//! Determinants, cofactors, adjoints and inverses by Laplace expansion.
//!
//! Every derivation here recurses through [`Matrix::minor`] and is
//! O(n!) in the matrix order. That is fine for the small matrices this crate
//! targets and unusable for anything large; there is no LU/QR fallback.
use num_traits::Signed;

use crate::error::{MatrixError, Result};
use crate::math::matrix::Matrix;
use crate::math::scalar::Scalar;

impl<T: Scalar + Signed> Matrix<T> {
    /// `(-1)^(row + col) * det(minor(row, col))`.
    pub fn cofactor(&self, row: usize, col: usize) -> Result<T> {
        let det = self.minor(row, col)?.determinant()?;
        if (row + col) % 2 == 0 {
            Ok(det)
        } else {
            Ok(-det)
        }
    }

    /// Determinant by cofactor expansion along the first row.
    ///
    /// The `0 x 0` matrix yields zero (the empty expansion sum).
    pub fn determinant(&self) -> Result<T> {
        self.check_square()?;
        match self.rows {
            1 => Ok(self.data[0]),
            2 => Ok(self.data[0] * self.data[3] - self.data[1] * self.data[2]),
            n => {
                log::trace!("expanding {}x{} determinant along row 0", n, n);
                let mut total = T::zero();
                for col in 0..n {
                    total += self.data[col] * self.cofactor(0, col)?;
                }
                Ok(total)
            }
        }
    }

    /// Transpose of the cofactor matrix (the adjugate).
    pub fn adjoint(&self) -> Result<Matrix<T>> {
        self.check_square()?;
        match self.rows {
            1 => Matrix::from_shape_vec(1, 1, vec![T::one()]),
            2 => {
                let (a, b, c, d) = (self.data[0], self.data[1], self.data[2], self.data[3]);
                Matrix::from_shape_vec(2, 2, vec![d, -b, -c, a])
            }
            n => {
                let mut cofactors = Matrix::zeros(n, n)?;
                for row in 0..n {
                    for col in 0..n {
                        cofactors.data[row * n + col] = self.cofactor(row, col)?;
                    }
                }
                cofactors.transpose();
                Ok(cofactors)
            }
        }
    }

    /// `adjoint() / determinant()`.
    ///
    /// Fails with [`MatrixError::SingularMatrix`] when the determinant is
    /// exactly zero. Integer matrices divide element-wise with truncation;
    /// use [`Matrix::cast`] first for a fractional inverse.
    pub fn inverse(&self) -> Result<Matrix<T>> {
        self.check_square()?;
        let det = self.determinant()?;
        if det.is_exact_zero() {
            return Err(MatrixError::SingularMatrix);
        }
        log::debug!(
            "inverting ({}, {}) matrix with determinant {}",
            self.rows,
            self.cols,
            det
        );
        self.adjoint()?.div_scalar(det)
    }

    pub fn is_invertible(&self) -> bool {
        matches!(self.determinant(), Ok(det) if !det.is_exact_zero())
    }

    /// Raises a square matrix to `power` in place.
    ///
    /// `0` gives the identity, a positive power repeated multiplication and
    /// a negative power repeated multiplication of the inverse.
    pub fn pow(&mut self, power: i32) -> Result<()> {
        self.check_square()?;
        log::debug!(
            "raising ({}, {}) matrix to power {}",
            self.rows,
            self.cols,
            power
        );

        let base = match power {
            0 => return self.set_identity(),
            p if p > 0 => self.clone(),
            _ => self.inverse()?,
        };
        let mut result = base.clone();
        for _ in 1..power.unsigned_abs() {
            result = result.checked_mul(&base)?;
        }
        *self = result;
        Ok(())
    }
}

impl<T: Scalar> Matrix<T> {
    /// The `(n-1) x (n-1)` submatrix left after deleting `row` and `col`.
    pub fn minor(&self, row: usize, col: usize) -> Result<Matrix<T>> {
        self.check_square()?;
        self.check_row(row)?;
        self.check_col(col)?;

        let mut data = Vec::with_capacity((self.rows - 1) * (self.cols - 1));
        for i in (0..self.rows).filter(|&i| i != row) {
            for j in (0..self.cols).filter(|&j| j != col) {
                data.push(self.data[self.offset(i, j)]);
            }
        }
        Matrix::from_shape_vec(self.rows - 1, self.cols - 1, data)
    }

    /// Sum of the main diagonal.
    pub fn trace(&self) -> Result<T> {
        self.check_square()?;
        let mut total = T::zero();
        for i in 0..self.rows {
            total += self.data[self.offset(i, i)];
        }
        Ok(total)
    }
}
