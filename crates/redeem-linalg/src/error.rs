use thiserror::Error;

/// Which line of a matrix an index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Col,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Col => write!(f, "column"),
        }
    }
}

/// Errors raised by [`Matrix`](crate::math::Matrix) operations.
///
/// Every fallible operation validates its arguments before touching the
/// matrix, so an `Err` always leaves the receiver unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("invalid matrix shape ({rows}, {cols})")]
    InvalidShape { rows: usize, cols: usize },

    #[error("cannot allocate a ({rows}, {cols}) matrix")]
    AllocationFailed { rows: usize, cols: usize },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{axis} index {index} out of range for extent {extent}")]
    OutOfRange {
        axis: Axis,
        index: usize,
        extent: usize,
    },

    #[error("size mismatch: expected {expected} values, found {found}")]
    SizeMismatch { expected: usize, found: usize },

    #[error("shape mismatch: {lhs:?} is incompatible with {rhs:?}")]
    ShapeMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    #[error("square matrix required, got ({rows}, {cols})")]
    NotSquare { rows: usize, cols: usize },

    #[error("matrix division by zero")]
    DivisionByZero,

    #[error("matrix is singular (null determinant)")]
    SingularMatrix,
}

pub type Result<T> = std::result::Result<T, MatrixError>;
