//! The dense `Matrix` type and everything that operates on it.
//!
//! Storage, construction and element access live in `matrix`; the other
//! modules add `impl Matrix<T>` blocks grouped by concern.
pub mod algebra;
pub mod arithmetic;
pub mod display;
pub mod editing;
pub mod matrix;
pub mod scalar;
#[cfg(feature = "serde")]
mod serialization;

pub use display::MatrixDisplay;
pub use matrix::Matrix;
pub use scalar::{are_equal, Scalar};
