//! Mathematical utilities for lamination calculations

use nalgebra::{Matrix3, Matrix6};

pub type Mat3 = Matrix3<f64>;
pub type Mat6 = Matrix6<f64>;

/// Plane-stress transformation matrix for in-plane quantities
///
/// Ordering is [axial-1, axial-2, shear-12]. This is the inverse of the
/// stress transformation for a fiber at `+theta`, so that
/// `T · K_LT · Tᵗ` gives the stiffness in the laminate axes with
/// engineering shear strain.
///
/// # Arguments
/// * `c` - cos(theta)
/// * `s` - sin(theta)
pub fn plane_rotation_matrix(c: f64, s: f64) -> Mat3 {
    let cs = c * s;
    Mat3::new(
        c * c, s * s, -2.0 * cs,
        s * s, c * c, 2.0 * cs,
        cs,    -cs,   c * c - s * s,
    )
}

/// Congruence triple product `t · k · tᵗ`
pub fn congruence(t: &Mat3, k: &Mat3) -> Mat3 {
    t * k * t.transpose()
}

/// Assemble the 6x6 [[A, B], [B, D]] matrix from its blocks
pub fn block_matrix(a: &Mat3, b: &Mat3, d: &Mat3) -> Mat6 {
    let mut m = Mat6::zeros();
    m.fixed_view_mut::<3, 3>(0, 0).copy_from(a);
    m.fixed_view_mut::<3, 3>(0, 3).copy_from(b);
    m.fixed_view_mut::<3, 3>(3, 0).copy_from(b);
    m.fixed_view_mut::<3, 3>(3, 3).copy_from(d);
    m
}

/// Check symmetry relative to the largest entry
pub fn is_symmetric(m: &Mat3, rel_tol: f64) -> bool {
    let scale = m.amax().max(f64::MIN_POSITIVE);
    (0..3).all(|i| (0..3).all(|j| (m[(i, j)] - m[(j, i)]).abs() <= rel_tol * scale))
}

/// Row-major nested array, the shape used in serialized reports
pub fn to_rows(m: &Mat3) -> [[f64; 3]; 3] {
    let mut rows = [[0.0; 3]; 3];
    for (i, row) in rows.iter_mut().enumerate() {
        for (j, v) in row.iter_mut().enumerate() {
            *v = m[(i, j)];
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rotation_identity_at_zero() {
        let t = plane_rotation_matrix(1.0, 0.0);
        assert_relative_eq!(t, Mat3::identity());
    }

    #[test]
    fn test_rotation_quarter_turn_swaps_axes() {
        let t = plane_rotation_matrix(0.0, 1.0);
        assert_relative_eq!(t[(0, 1)], 1.0);
        assert_relative_eq!(t[(1, 0)], 1.0);
        assert_relative_eq!(t[(2, 2)], -1.0);
        assert_relative_eq!(t[(0, 0)], 0.0);
    }

    #[test]
    fn test_congruence_preserves_symmetry() {
        let angle = 0.3_f64;
        let t = plane_rotation_matrix(angle.cos(), angle.sin());
        let k = Mat3::new(
            10.0, 2.0, 0.0,
            2.0, 5.0, 0.0,
            0.0, 0.0, 3.0,
        );
        assert!(is_symmetric(&congruence(&t, &k), 1e-12));
    }

    #[test]
    fn test_block_matrix_layout() {
        let a = Mat3::from_element(1.0);
        let b = Mat3::from_element(2.0);
        let d = Mat3::from_element(3.0);
        let m = block_matrix(&a, &b, &d);
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(0, 5)], 2.0);
        assert_eq!(m[(5, 0)], 2.0);
        assert_eq!(m[(4, 4)], 3.0);
    }

    #[test]
    fn test_to_rows_is_row_major() {
        let m = Mat3::new(
            1.0, 2.0, 3.0,
            4.0, 5.0, 6.0,
            7.0, 8.0, 9.0,
        );
        assert_eq!(to_rows(&m)[0], [1.0, 2.0, 3.0]);
        assert_eq!(to_rows(&m)[2][0], 7.0);
    }

    #[test]
    fn test_symmetry_scale_uses_largest_magnitude() {
        let m = Mat3::new(
            -1.0e9, 2.0,    0.0,
            2.5,    1.0,    0.0,
            0.0,    0.0,    1.0,
        );
        assert_eq!(m.amax(), 1.0e9);
        assert!(is_symmetric(&m, 1e-9));
        assert!(!is_symmetric(&m, 1e-10));
    }
}
