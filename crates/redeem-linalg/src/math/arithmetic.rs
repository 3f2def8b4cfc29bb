//! Scalar and matrix-matrix arithmetic.
//!
//! The named methods are the contract and return [`Result`]. The operator
//! impls at the bottom are sugar over them and panic with the error message
//! where the named method would fail.
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::Signed;

use crate::error::{MatrixError, Result};
use crate::math::matrix::Matrix;
use crate::math::scalar::Scalar;

impl<T: Scalar> Matrix<T> {
    pub fn mul_scalar(&self, value: T) -> Matrix<T> {
        let mut result = self.clone();
        result.mul_scalar_assign(value);
        result
    }

    pub fn mul_scalar_assign(&mut self, value: T) {
        for element in self.data.iter_mut() {
            *element *= value;
        }
    }

    /// Fails with [`MatrixError::DivisionByZero`] if `value` is exactly zero.
    pub fn div_scalar(&self, value: T) -> Result<Matrix<T>> {
        let mut result = self.clone();
        result.div_scalar_assign(value)?;
        Ok(result)
    }

    pub fn div_scalar_assign(&mut self, value: T) -> Result<()> {
        if value.is_exact_zero() {
            return Err(MatrixError::DivisionByZero);
        }
        for element in self.data.iter_mut() {
            *element /= value;
        }
        Ok(())
    }

    fn check_same_shape(&self, other: &Matrix<T>) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(MatrixError::ShapeMismatch {
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        Ok(())
    }

    /// Element-wise sum of two matrices of identical shape.
    pub fn checked_add(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.check_same_shape(other)?;
        let mut result = self.clone();
        for (lhs, &rhs) in result.data.iter_mut().zip(other.data.iter()) {
            *lhs += rhs;
        }
        Ok(result)
    }

    /// Element-wise difference of two matrices of identical shape.
    pub fn checked_sub(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.check_same_shape(other)?;
        let mut result = self.clone();
        for (lhs, &rhs) in result.data.iter_mut().zip(other.data.iter()) {
            *lhs -= rhs;
        }
        Ok(result)
    }

    /// Matrix product; requires `self.cols() == other.rows()`.
    pub fn checked_mul(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        if self.cols != other.rows {
            return Err(MatrixError::ShapeMismatch {
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        let mut result = Matrix::zeros(self.rows, other.cols)?;
        for i in 0..self.rows {
            let lhs_row = &self.data[i * self.cols..(i + 1) * self.cols];
            for j in 0..other.cols {
                let mut acc = T::zero();
                for (k, &lhs) in lhs_row.iter().enumerate() {
                    acc += lhs * other.data[k * other.cols + j];
                }
                result.data[i * other.cols + j] = acc;
            }
        }
        Ok(result)
    }

    pub fn try_add_assign(&mut self, other: &Matrix<T>) -> Result<()> {
        *self = self.checked_add(other)?;
        Ok(())
    }

    pub fn try_sub_assign(&mut self, other: &Matrix<T>) -> Result<()> {
        *self = self.checked_sub(other)?;
        Ok(())
    }

    pub fn try_mul_assign(&mut self, other: &Matrix<T>) -> Result<()> {
        *self = self.checked_mul(other)?;
        Ok(())
    }
}

impl<T: Scalar + Signed> Matrix<T> {
    /// Every element multiplied by `-1`.
    pub fn negated(&self) -> Matrix<T> {
        self.mul_scalar(-T::one())
    }

    /// `self * other.inverse()`.
    pub fn checked_div(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        let inverse = other.inverse()?;
        self.checked_mul(&inverse)
    }

    pub fn try_div_assign(&mut self, other: &Matrix<T>) -> Result<()> {
        *self = self.checked_div(other)?;
        Ok(())
    }
}

fn expect_ok<V>(result: Result<V>) -> V {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{}", err),
    }
}

macro_rules! impl_matrix_binop {
    ($trait:ident, $method:ident, $checked:ident, $($bound:tt)+) => {
        impl<'a, 'b, T: $($bound)+> $trait<&'b Matrix<T>> for &'a Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, rhs: &'b Matrix<T>) -> Matrix<T> {
                expect_ok(self.$checked(rhs))
            }
        }

        impl<'b, T: $($bound)+> $trait<&'b Matrix<T>> for Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, rhs: &'b Matrix<T>) -> Matrix<T> {
                expect_ok(self.$checked(rhs))
            }
        }

        impl<T: $($bound)+> $trait<Matrix<T>> for Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, rhs: Matrix<T>) -> Matrix<T> {
                expect_ok(self.$checked(&rhs))
            }
        }
    };
}

macro_rules! impl_matrix_assign_op {
    ($trait:ident, $method:ident, $try_assign:ident, $($bound:tt)+) => {
        impl<'b, T: $($bound)+> $trait<&'b Matrix<T>> for Matrix<T> {
            fn $method(&mut self, rhs: &'b Matrix<T>) {
                expect_ok(self.$try_assign(rhs))
            }
        }

        impl<T: $($bound)+> $trait<Matrix<T>> for Matrix<T> {
            fn $method(&mut self, rhs: Matrix<T>) {
                expect_ok(self.$try_assign(&rhs))
            }
        }
    };
}

impl_matrix_binop!(Add, add, checked_add, Scalar);
impl_matrix_binop!(Sub, sub, checked_sub, Scalar);
impl_matrix_binop!(Mul, mul, checked_mul, Scalar);
impl_matrix_binop!(Div, div, checked_div, Scalar + Signed);

impl_matrix_assign_op!(AddAssign, add_assign, try_add_assign, Scalar);
impl_matrix_assign_op!(SubAssign, sub_assign, try_sub_assign, Scalar);
impl_matrix_assign_op!(MulAssign, mul_assign, try_mul_assign, Scalar);
impl_matrix_assign_op!(DivAssign, div_assign, try_div_assign, Scalar + Signed);

impl<T: Scalar + Signed> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        self.negated()
    }
}

impl<T: Scalar + Signed> Neg for Matrix<T> {
    type Output = Matrix<T>;

    fn neg(mut self) -> Matrix<T> {
        self.mul_scalar_assign(-T::one());
        self
    }
}

// Scalar operands are implemented per concrete type: a blanket
// `Mul<T> for Matrix<T>` would overlap with `Mul<Matrix<T>>`, and
// `T * Matrix<T>` needs a local self type.
macro_rules! impl_scalar_ops {
    ($($t:ty),*) => {
        $(
            impl Mul<$t> for &Matrix<$t> {
                type Output = Matrix<$t>;

                fn mul(self, rhs: $t) -> Matrix<$t> {
                    self.mul_scalar(rhs)
                }
            }

            impl Mul<$t> for Matrix<$t> {
                type Output = Matrix<$t>;

                fn mul(mut self, rhs: $t) -> Matrix<$t> {
                    self.mul_scalar_assign(rhs);
                    self
                }
            }

            impl Mul<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn mul(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                    rhs.mul_scalar(self)
                }
            }

            impl Mul<Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn mul(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }

            impl MulAssign<$t> for Matrix<$t> {
                fn mul_assign(&mut self, rhs: $t) {
                    self.mul_scalar_assign(rhs);
                }
            }

            impl Div<$t> for &Matrix<$t> {
                type Output = Matrix<$t>;

                fn div(self, rhs: $t) -> Matrix<$t> {
                    expect_ok(self.div_scalar(rhs))
                }
            }

            impl Div<$t> for Matrix<$t> {
                type Output = Matrix<$t>;

                fn div(mut self, rhs: $t) -> Matrix<$t> {
                    expect_ok(self.div_scalar_assign(rhs));
                    self
                }
            }

            impl DivAssign<$t> for Matrix<$t> {
                fn div_assign(&mut self, rhs: $t) {
                    expect_ok(self.div_scalar_assign(rhs));
                }
            }
        )*
    };
}

impl_scalar_ops!(i8, i16, i32, i64, i128, isize);
impl_scalar_ops!(u8, u16, u32, u64, u128, usize);
impl_scalar_ops!(f32, f64);
