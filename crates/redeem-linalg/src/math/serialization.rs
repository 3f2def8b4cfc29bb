//! Serialization as `{ "rows": r, "cols": c, "data": [...] }`.
//!
//! Deserialization goes through [`Matrix::from_shape_vec`], so a document
//! whose buffer does not match its shape is rejected.
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::math::matrix::Matrix;
use crate::math::scalar::Scalar;

#[derive(Serialize)]
struct MatrixRef<'a, T> {
    rows: usize,
    cols: usize,
    data: &'a [T],
}

#[derive(Deserialize)]
struct MatrixRepr<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Scalar + Serialize> Serialize for Matrix<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        MatrixRef {
            rows: self.rows,
            cols: self.cols,
            data: &self.data,
        }
        .serialize(serializer)
    }
}

impl<'de, T: Scalar + Deserialize<'de>> Deserialize<'de> for Matrix<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = MatrixRepr::<T>::deserialize(deserializer)?;
        Matrix::from_shape_vec(repr.rows, repr.cols, repr.data).map_err(D::Error::custom)
    }
}
