use std::fmt;

use crate::config::FormatConfig;
use crate::math::matrix::Matrix;
use crate::math::scalar::Scalar;

/// A matrix paired with the [`FormatConfig`] used to print it.
pub struct MatrixDisplay<'a, T> {
    matrix: &'a Matrix<T>,
    config: &'a FormatConfig,
}

impl<T: Scalar> Matrix<T> {
    /// Renders with elision and precision taken from `config`.
    ///
    /// ```
    /// use redeem_linalg::{FormatConfig, Matrix};
    ///
    /// let m = Matrix::from_rows(&[[1.0f64, 2.5], [3.0, 4.0]]).unwrap();
    /// let config = FormatConfig::default().with_precision(1);
    /// assert_eq!(m.display_with(&config).to_string(), "[[1.0, 2.5],\n [3.0, 4.0]]");
    /// ```
    pub fn display_with<'a>(&'a self, config: &'a FormatConfig) -> MatrixDisplay<'a, T> {
        MatrixDisplay {
            matrix: self,
            config,
        }
    }
}

/// Indices to print for an axis of length `len`, with `None` marking the
/// elided middle.
fn visible(len: usize, limit: Option<usize>) -> Vec<Option<usize>> {
    match limit {
        Some(limit) if limit.saturating_mul(2) < len => (0..limit)
            .map(Some)
            .chain(std::iter::once(None))
            .chain((len - limit..len).map(Some))
            .collect(),
        _ => (0..len).map(Some).collect(),
    }
}

impl<T: Scalar> fmt::Display for MatrixDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let matrix = self.matrix;
        let rows = visible(matrix.rows(), self.config.max_rows);
        let cols = visible(matrix.cols(), self.config.max_cols);

        write!(f, "[")?;
        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                write!(f, ",\n ")?;
            }
            let row = match row {
                Some(row) => *row,
                None => {
                    write!(f, "...")?;
                    continue;
                }
            };
            write!(f, "[")?;
            for (j, col) in cols.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                match (col, self.config.precision) {
                    (None, _) => write!(f, "...")?,
                    (Some(col), Some(precision)) => {
                        write!(f, "{:.*}", precision, matrix[(row, *col)])?
                    }
                    (Some(col), None) => write!(f, "{}", matrix[(row, *col)])?,
                }
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

impl<T: Scalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = FormatConfig::default();
        fmt::Display::fmt(&self.display_with(&config), f)
    }
}
