//! Numeric checks on noise matrices.

use crate::NoiseMatrix;
use tracing::trace;

/// Determinant magnitudes at or below this are treated as singular.
pub const DEFAULT_INVERTIBILITY_TOL: f64 = 1e-10;

/// |det(A)| from a partially pivoted LU factorisation.
///
/// The factorisation never fails on singular input; a zero pivot just shows up
/// as a zero on the diagonal of U. Returns `None` for non-square matrices.
pub fn determinant_magnitude(matrix: &NoiseMatrix) -> Option<f64> {
    if !matrix.is_square() {
        return None;
    }
    let u = matrix.clone().lu().u();
    Some(u.diagonal().iter().product::<f64>().abs())
}

/// Invertibility up to `tol`. Non-square matrices are never invertible.
pub fn is_invertible(matrix: &NoiseMatrix, tol: f64) -> bool {
    match determinant_magnitude(matrix) {
        Some(det) => {
            trace!(det, tol, "determinant magnitude");
            det > tol
        }
        None => {
            trace!(rows = matrix.nrows(), cols = matrix.ncols(), "non-square matrix is not invertible");
            false
        }
    }
}

/// A · Aᵗ, symmetric and positive semi-definite for any A.
pub fn outer_product(a: &NoiseMatrix) -> NoiseMatrix {
    a * a.transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::DMatrix;

    #[test]
    fn test_identity_is_invertible() {
        let eye = DMatrix::<f64>::identity(4, 4);
        assert_relative_eq!(determinant_magnitude(&eye).unwrap(), 1.0);
        assert!(is_invertible(&eye, DEFAULT_INVERTIBILITY_TOL));
    }

    #[test]
    fn test_zero_matrix_is_singular() {
        let zero = DMatrix::<f64>::zeros(3, 3);
        assert!(!is_invertible(&zero, DEFAULT_INVERTIBILITY_TOL));
    }

    #[test]
    fn test_determinant_sign_is_dropped() {
        // Row swap: det = -1
        let swap = DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 1.0, 0.0]);
        assert_relative_eq!(determinant_magnitude(&swap).unwrap(), 1.0);
    }

    #[test]
    fn test_near_singular_below_tolerance() {
        let m = DMatrix::from_row_slice(2, 2, &[1.0, 0.0, 0.0, 1e-12]);
        assert!(!is_invertible(&m, DEFAULT_INVERTIBILITY_TOL));
        assert!(is_invertible(&m, 1e-13));
    }

    #[test]
    fn test_rank_deficient() {
        let m = DMatrix::from_row_slice(3, 3, &[
            1.0, 2.0, 3.0,
            2.0, 4.0, 6.0,
            1.0, 0.0, 1.0,
        ]);
        assert!(!is_invertible(&m, DEFAULT_INVERTIBILITY_TOL));
    }

    #[test]
    fn test_non_square() {
        let m = DMatrix::<f64>::from_element(2, 3, 1.0);
        assert_eq!(determinant_magnitude(&m), None);
        assert!(!is_invertible(&m, DEFAULT_INVERTIBILITY_TOL));
    }

    #[test]
    fn test_outer_product_is_symmetric() {
        let a = DMatrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, -1.0, 0.5, 4.0]);
        let cov = outer_product(&a);
        assert_eq!(cov.shape(), (2, 2));
        assert_relative_eq!(cov, cov.transpose());
        assert_relative_eq!(cov[(0, 0)], 14.0);
        assert_relative_eq!(cov[(0, 1)], 12.0);
    }
}
