//! Ply rotated into the laminate (x, y) axes
//!
//! Off-axis engineering constants follow the closed-form quartic
//! expressions in cos/sin of the fiber angle. The rotated stiffness is the
//! congruence `T · K_LT · Tᵗ` and the rotated compliance is its exact
//! inverse, assembled from the engineering constants.

use super::PrincipalAxisLamina;
use crate::error::{check_finite, CLTResult};
use crate::math::{self, Mat3};

/// A ply at fiber angle `theta` expressed in the laminate axes
#[derive(Debug, Clone)]
pub struct RotatedLamina {
    /// The ply in its own axes
    pub principal: PrincipalAxisLamina,
    /// Fiber angle in radians
    pub theta: f64,
    pub cos_theta: f64,
    pub sin_theta: f64,
    /// Plane-stress reduced longitudinal modulus
    pub hat_e_l: f64,
    /// Plane-stress reduced transverse modulus
    pub hat_e_t: f64,
    pub e_x: f64,
    pub e_y: f64,
    pub g_xy: f64,
    pub mu_yx: f64,
    /// Shear-extension coupling along x
    pub eta_xy: f64,
    /// Shear-extension coupling along y
    pub mu_xy: f64,
    /// Compliance in laminate axes, ordering [x, y, xy]
    pub compliance: Mat3,
    /// Rotation matrix T
    pub transformation: Mat3,
    /// Stiffness in fiber axes
    pub stiffness_lt: Mat3,
    /// Stiffness in laminate axes
    pub stiffness_xy: Mat3,
}

impl RotatedLamina {
    /// Rotate a principal-axis ply by `theta` radians
    pub fn new(principal: PrincipalAxisLamina, theta: f64) -> CLTResult<Self> {
        check_finite("theta", theta)?;

        let e_l = principal.e_l();
        let e_t = principal.e_t();
        let g_lt = principal.g_lt();
        let nu_lt = principal.nu_lt();

        let c = theta.cos();
        let s = theta.sin();
        let c2 = c * c;
        let s2 = s * s;
        let cs = c * s;
        let cs2 = cs * cs;

        let stiffness_lt = principal.stiffness();
        let hat_e_l = stiffness_lt[(0, 0)];
        let hat_e_t = stiffness_lt[(1, 1)];

        let e_x = 1.0 / (c2 * c2 / e_l + s2 * s2 / e_t + cs2 * (1.0 / g_lt - 2.0 * nu_lt / e_l));
        let e_y = 1.0 / (s2 * s2 / e_l + c2 * c2 / e_t + cs2 * (1.0 / g_lt - 2.0 * nu_lt / e_l));
        let g_xy = 1.0
            / (4.0 * cs2 * (1.0 / e_l + 1.0 / e_t + 2.0 * nu_lt / e_l)
                + (c2 - s2).powi(2) / g_lt);
        let mu_yx = (nu_lt / e_l * (c2 * c2 + s2 * s2)
            - cs2 * (1.0 / e_l + 1.0 / e_t - 1.0 / g_lt))
            * e_y;

        // Sign of the coupling terms follows the rotation convention of T
        let shear_term = (c2 - s2) * (nu_lt / e_l - 0.5 / g_lt);
        let eta_xy = 2.0 * cs * (c2 / e_l - s2 / e_t + shear_term) * g_xy;
        let mu_xy = 2.0 * cs * (s2 / e_l - c2 / e_t - shear_term) * g_xy;

        let compliance = Mat3::new(
            1.0 / e_x,      -mu_yx / e_y,   eta_xy / g_xy,
            -mu_yx / e_y,   1.0 / e_y,      mu_xy / g_xy,
            eta_xy / g_xy,  mu_xy / g_xy,   1.0 / g_xy,
        );

        let transformation = math::plane_rotation_matrix(c, s);
        let stiffness_xy = math::congruence(&transformation, &stiffness_lt);

        Ok(Self {
            principal,
            theta,
            cos_theta: c,
            sin_theta: s,
            hat_e_l,
            hat_e_t,
            e_x,
            e_y,
            g_xy,
            mu_yx,
            eta_xy,
            mu_xy,
            compliance,
            transformation,
            stiffness_lt,
            stiffness_xy,
        })
    }

    /// Rotate by an angle given in degrees
    pub fn from_degrees(principal: PrincipalAxisLamina, degrees: f64) -> CLTResult<Self> {
        Self::new(principal, degrees.to_radians())
    }

    /// Fiber angle in degrees
    pub fn theta_degrees(&self) -> f64 {
        self.theta.to_degrees()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn carbon_epoxy() -> PrincipalAxisLamina {
        PrincipalAxisLamina::new(140e9, 5e9, 5e9, 0.35).unwrap()
    }

    #[test]
    fn test_zero_angle_matches_fiber_axes() {
        let materials = [(140e9, 5e9, 5e9), (45e9, 12e9, 5.5e9), (10e9, 10e9, 3.8e9), (2e6, 7e6, 0.4e6)];
        for (e_l, e_t, g_lt) in materials {
            for nu_lt in [0.0, 0.2, 0.35, 0.49] {
                let principal = PrincipalAxisLamina::new(e_l, e_t, g_lt, nu_lt).unwrap();
                let ply = RotatedLamina::new(principal, 0.0).unwrap();

                assert_relative_eq!(ply.e_x, e_l, max_relative = 1e-12);
                assert_relative_eq!(ply.e_y, e_t, max_relative = 1e-12);
                assert_relative_eq!(ply.g_xy, g_lt, max_relative = 1e-12);
                assert_relative_eq!(ply.mu_yx, principal.nu_tl(), max_relative = 1e-12);
                assert_relative_eq!(ply.stiffness_xy, principal.stiffness(), max_relative = 1e-12);
                assert_relative_eq!(ply.compliance, *principal.compliance(), max_relative = 1e-12);
                assert_eq!(ply.eta_xy, 0.0);
                assert_eq!(ply.mu_xy, 0.0);
            }
        }
    }

    #[test]
    fn test_reduced_moduli_on_stiffness_diagonal() {
        let principal = carbon_epoxy();
        let ply = RotatedLamina::from_degrees(principal, 30.0).unwrap();
        let denom = principal.poisson_product_complement();
        assert_relative_eq!(ply.hat_e_l, 140e9 / denom, max_relative = 1e-12);
        assert_relative_eq!(ply.hat_e_t, 5e9 / denom, max_relative = 1e-12);
        assert_eq!(ply.stiffness_lt, principal.stiffness());
    }

    #[test]
    fn test_periodic_in_half_turn() {
        for theta in [0.2, PI / 6.0, PI / 4.0, 1.3] {
            let a = RotatedLamina::new(carbon_epoxy(), theta).unwrap();
            let b = RotatedLamina::new(carbon_epoxy(), theta + PI).unwrap();
            assert_relative_eq!(a.e_x, b.e_x, max_relative = 1e-10);
            assert_relative_eq!(a.e_y, b.e_y, max_relative = 1e-10);
            assert_relative_eq!(a.g_xy, b.g_xy, max_relative = 1e-10);
            assert_relative_eq!(a.stiffness_xy, b.stiffness_xy, max_relative = 1e-9, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_quarter_turn_swaps_moduli() {
        let ply = RotatedLamina::from_degrees(carbon_epoxy(), 90.0).unwrap();
        assert_relative_eq!(ply.e_x, 5e9, max_relative = 1e-10);
        assert_relative_eq!(ply.e_y, 140e9, max_relative = 1e-10);
    }

    #[test]
    fn test_off_axis_reference_values() {
        let ply = RotatedLamina::from_degrees(carbon_epoxy(), 30.0).unwrap();
        assert_relative_eq!(ply.e_x, 18.839_360_807e9, max_relative = 1e-9);
        assert_relative_eq!(ply.e_y, 6.688_563_750e9, max_relative = 1e-9);
        assert_relative_eq!(ply.g_xy, 4.782_237_404e9, max_relative = 1e-9);
        assert_relative_eq!(ply.eta_xy, -0.386_790_168, max_relative = 1e-8);
        assert_relative_eq!(ply.mu_xy, -0.411_935_226, max_relative = 1e-8);
    }

    #[test]
    fn test_compliance_inverts_rotated_stiffness() {
        for degrees in [15.0, 30.0, 45.0, -60.0, 75.0] {
            let ply = RotatedLamina::from_degrees(carbon_epoxy(), degrees).unwrap();
            let product = ply.compliance * ply.stiffness_xy;
            assert_relative_eq!(product, Mat3::identity(), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_rotated_stiffness_symmetric() {
        let ply = RotatedLamina::from_degrees(carbon_epoxy(), 37.0).unwrap();
        assert!(math::is_symmetric(&ply.stiffness_xy, 1e-12));
    }

    #[test]
    fn test_balanced_pair_opposite_coupling() {
        let plus = RotatedLamina::from_degrees(carbon_epoxy(), 45.0).unwrap();
        let minus = RotatedLamina::from_degrees(carbon_epoxy(), -45.0).unwrap();
        assert_relative_eq!(plus.eta_xy, -minus.eta_xy, max_relative = 1e-12);
        assert_relative_eq!(
            plus.stiffness_xy[(0, 2)],
            -minus.stiffness_xy[(0, 2)],
            max_relative = 1e-9
        );
    }
}
