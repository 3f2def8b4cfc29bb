//! Integration tests for scalar and matrix-matrix arithmetic.

use redeem_linalg::{are_equal, Matrix, MatrixError};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0),
        "expected {expected}, got {actual}"
    );
}

// ---------------------------------------------------------------------------
// Scalar multiplication and division
// ---------------------------------------------------------------------------

#[test]
fn mul_scalar_negative_int() {
    let int_matrix = Matrix::from_rows(&[
        [1i32, 2, 3, 4],
        [5, 6, 7, 8],
        [9, 10, 11, 12],
        [13, 14, 15, 16],
    ])
    .unwrap();
    let result = int_matrix * -4i32;
    assert_eq!(result[(2, 1)], -40);
    assert_eq!(result[(0, 3)], -16);
    assert_eq!(result[(3, 2)], -60);
}

#[test]
fn mul_scalar_positive_double() {
    let double_matrix =
        Matrix::from_rows(&[[0.42f64, 32.1], [44.112, 4.0], [34.52, 1.245]]).unwrap();
    let result = double_matrix.mul_scalar(2.0f64);
    assert_eq!(result[(1, 1)], 8.0);
    assert_eq!(result[(0, 1)], 64.2);
    assert_eq!(result[(2, 0)], 69.04);

    // Commutes with the scalar on the left.
    assert_eq!(2.0f64 * &double_matrix, result);
}

#[test]
fn mul_scalar_zero_gives_zero_matrix() {
    let float_matrix = Matrix::from_rows(&[[1.1f32, 42.0, 4.24], [7.5, 2.275, 1.124]]).unwrap();
    let zeroed = &float_matrix * 0.0f32;
    assert_eq!(zeroed.shape(), (2, 3));
    assert!(zeroed.is_zero());

    let int_matrix = Matrix::from_rows(&[[3i64, -7], [11, 2]]).unwrap();
    assert_eq!(int_matrix.mul_scalar(0), Matrix::zeros(2, 2).unwrap());
}

#[test]
fn div_scalar_truncates_integers() {
    let int_matrix =
        Matrix::from_rows(&[[2i32, 22, 13, 4], [5, 2, 14, 8], [52, 4, 72, 16]]).unwrap();
    let result = int_matrix.div_scalar(2).unwrap();
    assert_eq!(result[(1, 0)], 2);
    assert_eq!(result[(0, 2)], 6);
    assert_eq!(result[(2, 3)], 8);
}

#[test]
fn div_scalar_negative_double() {
    let double_matrix = Matrix::from_rows(&[[0.51f64, 9.25, 0.21], [-0.25, 27.125, 1.03]]).unwrap();
    let result = &double_matrix / -0.5f64;
    assert_eq!(result[(1, 1)], -54.25);
    assert_eq!(result[(1, 0)], 0.5);
    assert_close(result[(0, 2)], -0.42);
}

#[test]
fn div_scalar_by_zero_fails() {
    let float_matrix = Matrix::from_rows(&[[1.37f32, 5.071], [2.25, 31.0], [15.12, 0.34]]).unwrap();
    assert_eq!(
        float_matrix.div_scalar(0.0),
        Err(MatrixError::DivisionByZero)
    );

    let mut int_matrix = Matrix::from_rows(&[[4i32, 8], [12, 16]]).unwrap();
    assert_eq!(
        int_matrix.div_scalar_assign(0),
        Err(MatrixError::DivisionByZero)
    );
    assert_eq!(int_matrix, Matrix::from_rows(&[[4, 8], [12, 16]]).unwrap());
}

#[test]
fn mul_assign_scalar() {
    let mut int_matrix = Matrix::from_rows(&[
        [-27i32, 105, 53, -41],
        [79, 72, -126, 79],
        [112, -8, 64, 84],
    ])
    .unwrap();
    int_matrix *= 3i32;
    assert_eq!(int_matrix[(0, 1)], 315);
    assert_eq!(int_matrix[(2, 1)], -24);
    assert_eq!(int_matrix[(1, 3)], 237);

    let mut double_matrix =
        Matrix::from_rows(&[[3.54f64, 4.03, -1.3], [1.14, 25.4, 64.34]]).unwrap();
    double_matrix.mul_scalar_assign(-1.5);
    assert_close(double_matrix[(1, 1)], -38.1);
    assert_close(double_matrix[(1, 0)], -1.71);
    assert_close(double_matrix[(0, 2)], 1.95);

    let mut float_matrix = Matrix::from_rows(&[[21.14f32, 17.125], [7.24, 0.13]]).unwrap();
    float_matrix *= 0.0f32;
    assert!(float_matrix.is_zero());
}

#[test]
fn div_assign_scalar() {
    let mut int_matrix =
        Matrix::from_rows(&[[2i32, 4, 132, 53], [-10, 17, 108, 9], [0, 10, -14, 6]]).unwrap();
    int_matrix /= 2i32;
    assert_eq!(int_matrix[(0, 2)], 66);
    assert_eq!(int_matrix[(1, 1)], 8);
    assert_eq!(int_matrix[(1, 0)], -5);

    let mut double_matrix = Matrix::from_rows(&[[0.15f64, 2.25], [-9.2, 11.3]]).unwrap();
    double_matrix.div_scalar_assign(-0.2).unwrap();
    assert_close(double_matrix[(1, 1)], -56.5);
    assert_close(double_matrix[(1, 0)], 46.0);
    assert_close(double_matrix[(0, 1)], -11.25);
}

#[test]
#[should_panic(expected = "division by zero")]
fn div_assign_operator_by_zero_panics() {
    let mut float_matrix = Matrix::from_rows(&[[7.5f32, 0.523], [52.1, -0.41]]).unwrap();
    float_matrix /= 0.0f32;
}

#[test]
fn negation() {
    let m = Matrix::from_rows(&[[1i32, -2], [0, 4]]).unwrap();
    let expected = Matrix::from_rows(&[[-1, 2], [0, -4]]).unwrap();
    assert_eq!(m.negated(), expected);
    assert_eq!(-&m, expected);
    assert_eq!(-m, expected);
}

// ---------------------------------------------------------------------------
// Matrix-matrix arithmetic
// ---------------------------------------------------------------------------

#[test]
fn add_and_sub_elementwise() {
    let a = Matrix::from_rows(&[[1i32, 2, 3], [4, 5, 6]]).unwrap();
    let b = Matrix::from_rows(&[[10, 20, 30], [40, 50, 60]]).unwrap();

    let sum = a.checked_add(&b).unwrap();
    assert_eq!(
        sum,
        Matrix::from_rows(&[[11, 22, 33], [44, 55, 66]]).unwrap()
    );
    assert_eq!(&a + &b, sum);

    let diff = b.checked_sub(&a).unwrap();
    assert_eq!(
        diff,
        Matrix::from_rows(&[[9, 18, 27], [36, 45, 54]]).unwrap()
    );
    assert_eq!(b - &a, diff);
}

#[test]
fn add_rejects_shape_mismatch() {
    let a = Matrix::<f64>::zeros(2, 3).unwrap();
    let b = Matrix::<f64>::zeros(3, 2).unwrap();
    assert_eq!(
        a.checked_add(&b),
        Err(MatrixError::ShapeMismatch {
            lhs: (2, 3),
            rhs: (3, 2)
        })
    );
    assert!(matches!(
        a.checked_sub(&b),
        Err(MatrixError::ShapeMismatch { .. })
    ));
}

#[test]
fn mul_matrix_product() {
    let a = Matrix::from_rows(&[[1i32, 2, 3], [4, 5, 6]]).unwrap();
    let b = Matrix::from_rows(&[[7, 8], [9, 10], [11, 12]]).unwrap();
    let product = a.checked_mul(&b).unwrap();
    assert_eq!(product.shape(), (2, 2));
    assert_eq!(product, Matrix::from_rows(&[[58, 64], [139, 154]]).unwrap());

    let reverse = &b * &a;
    assert_eq!(reverse.shape(), (3, 3));
    assert_eq!(reverse[(0, 0)], 7 + 32);
    assert_eq!(reverse[(2, 2)], 33 + 72);
}

#[test]
fn mul_rejects_inner_dimension_mismatch() {
    let a = Matrix::<i32>::zeros(2, 3).unwrap();
    let b = Matrix::<i32>::zeros(2, 3).unwrap();
    assert!(matches!(
        a.checked_mul(&b),
        Err(MatrixError::ShapeMismatch { .. })
    ));
}

#[test]
fn div_is_mul_by_inverse() {
    let a = Matrix::from_rows(&[[5.0f64, 6.0], [7.0, 8.0]]).unwrap();
    let b = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    let quotient = a.checked_div(&b).unwrap();
    let expected = a.checked_mul(&b.inverse().unwrap()).unwrap();
    assert_eq!(quotient, expected);
    assert_eq!(&a / &b, expected);
}

#[test]
fn div_propagates_inverse_errors() {
    let a = Matrix::from_rows(&[[1.0f64, 2.0], [3.0, 4.0]]).unwrap();
    let singular = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]]).unwrap();
    assert_eq!(a.checked_div(&singular), Err(MatrixError::SingularMatrix));

    let wide = Matrix::<f64>::zeros(2, 3).unwrap();
    assert!(matches!(
        a.checked_div(&wide),
        Err(MatrixError::NotSquare { rows: 2, cols: 3 })
    ));
}

#[test]
fn compound_assignment_matches_binary_ops() -> anyhow::Result<()> {
    let a = Matrix::from_rows(&[[2i32, 1], [1, 3]])?;
    let b = Matrix::from_rows(&[[1, 0], [4, -2]])?;

    let mut m = a.clone();
    m.try_add_assign(&b)?;
    assert_eq!(m, a.checked_add(&b)?);

    let mut m = a.clone();
    m -= &b;
    assert_eq!(m, a.checked_sub(&b)?);

    let mut m = a.clone();
    m *= b.clone();
    assert_eq!(m, a.checked_mul(&b)?);

    let unit = Matrix::<i32>::identity(2)?;
    let mut m = a.clone();
    m.try_div_assign(&unit)?;
    assert_eq!(m, a);
    Ok(())
}

#[test]
fn failed_compound_assignment_leaves_matrix_untouched() {
    let original = Matrix::from_rows(&[[1.5f64, 2.5], [3.5, 4.5]]).unwrap();
    let wrong = Matrix::<f64>::zeros(3, 3).unwrap();

    let mut m = original.clone();
    assert!(m.try_add_assign(&wrong).is_err());
    assert!(m.try_sub_assign(&wrong).is_err());
    assert!(m.try_mul_assign(&wrong).is_err());
    let singular = Matrix::from_rows(&[[0.0, 0.0], [0.0, 0.0]]).unwrap();
    assert!(m.try_div_assign(&singular).is_err());
    assert_eq!(m, original);
}

#[test]
fn element_rule_matches_free_function() {
    let a = Matrix::from_rows(&[[0.1f64 + 0.2]]).unwrap();
    assert!(are_equal(a[(0, 0)], 0.3));
    assert!(!are_equal(1i32, 2));
}
