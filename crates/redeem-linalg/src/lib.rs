//! redeem-linalg: a small generic dense matrix type.
//!
//! `Matrix<T>` stores its elements in one row-major buffer and supports
//! scalar and matrix arithmetic, row/column editing and the classical
//! cofactor-expansion derivations (determinant, adjoint, inverse, powers).
//!
//! The derivations use Laplace expansion and run in O(n!) time, so they are
//! meant for small matrices. Element types are limited to the built-in
//! integers and floats through the sealed [`Scalar`] trait; floating-point
//! equality uses a relative epsilon (see [`Scalar::approx_eq`]).
//!
//! ```
//! use redeem_linalg::Matrix;
//!
//! let m = Matrix::from_rows(&[[1i32, 2], [3, 4]]).unwrap();
//! assert_eq!(m.determinant().unwrap(), -2);
//!
//! let inv = m.cast::<f64>().unwrap().inverse().unwrap();
//! assert_eq!(inv, Matrix::from_rows(&[[-2.0, 1.0], [1.5, -0.5]]).unwrap());
//! ```
pub mod config;
pub mod error;
pub mod math;

pub use config::FormatConfig;
pub use error::{Axis, MatrixError, Result};
pub use math::{are_equal, Matrix, MatrixDisplay, Scalar};
