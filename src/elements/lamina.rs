//! Orthotropic ply in its own fiber-aligned axes

use crate::error::{check_finite, check_modulus, CLTResult};
use crate::math::Mat3;

/// A unidirectional ply described in its principal (L, T) axes
///
/// Only [`PrincipalAxisLamina::new`] builds one, so every instance has
/// positive moduli. Serialize it through [`crate::results::LaminaReport`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrincipalAxisLamina {
    e_l: f64,
    e_t: f64,
    g_lt: f64,
    nu_lt: f64,
    nu_tl: f64,
    compliance: Mat3,
}

impl PrincipalAxisLamina {
    /// Build the fiber-axis compliance of an orthotropic ply
    ///
    /// Zero or negative moduli are rejected here so they never reach
    /// the matrix assembly.
    pub fn new(e_l: f64, e_t: f64, g_lt: f64, nu_lt: f64) -> CLTResult<Self> {
        check_modulus("E_l", e_l)?;
        check_modulus("E_t", e_t)?;
        check_modulus("G_lt", g_lt)?;
        check_finite("nu_lt", nu_lt)?;

        let nu_tl = nu_lt * e_t / e_l;
        let compliance = Mat3::new(
            1.0 / e_l,     -nu_lt / e_l, 0.0,
            -nu_lt / e_l,  1.0 / e_t,    0.0,
            0.0,           0.0,          1.0 / g_lt,
        );

        Ok(Self {
            e_l,
            e_t,
            g_lt,
            nu_lt,
            nu_tl,
            compliance,
        })
    }

    pub fn e_l(&self) -> f64 {
        self.e_l
    }

    pub fn e_t(&self) -> f64 {
        self.e_t
    }

    pub fn g_lt(&self) -> f64 {
        self.g_lt
    }

    pub fn nu_lt(&self) -> f64 {
        self.nu_lt
    }

    /// Minor Poisson ratio from reciprocity: nu_lt / E_l == nu_tl / E_t
    pub fn nu_tl(&self) -> f64 {
        self.nu_tl
    }

    /// Compliance in fiber axes, ordering [L, T, LT]
    pub fn compliance(&self) -> &Mat3 {
        &self.compliance
    }

    /// 1 - nu_lt * nu_tl, the plane-stress reduction denominator
    pub fn poisson_product_complement(&self) -> f64 {
        1.0 - self.nu_lt * self.nu_tl
    }

    /// Plane-stress reduced stiffness in fiber axes
    ///
    /// Written with both off-diagonal forms; they agree through reciprocity.
    pub fn stiffness(&self) -> Mat3 {
        let denom = self.poisson_product_complement();
        let hat_e_l = self.e_l / denom;
        let hat_e_t = self.e_t / denom;
        Mat3::new(
            hat_e_l,              self.nu_tl * hat_e_l, 0.0,
            self.nu_lt * hat_e_t, hat_e_t,              0.0,
            0.0,                  0.0,                  self.g_lt,
        )
    }
}
