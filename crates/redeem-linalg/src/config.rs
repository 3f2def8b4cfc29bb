#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Settings for rendering a matrix as text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormatConfig {
    /// Decimal places for each element; `None` uses the type's own `Display`.
    pub precision: Option<usize>,

    /// Rows shown from each end before eliding the middle with `...`.
    pub max_rows: Option<usize>,

    /// Columns shown from each end before eliding the middle with `...`.
    pub max_cols: Option<usize>,
}

impl FormatConfig {
    pub fn new(precision: Option<usize>, max_rows: Option<usize>, max_cols: Option<usize>) -> Self {
        Self {
            precision,
            max_rows,
            max_cols,
        }
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = Some(max_rows);
        self
    }

    pub fn with_max_cols(mut self, max_cols: usize) -> Self {
        self.max_cols = Some(max_cols);
        self
    }
}
