//! Laminate assembly - through-thickness integration of ply stiffness
//!
//! Plies are stacked bottom to top in the order given. The thickness
//! coordinate z has its origin on the mid-plane, so the interfaces are
//! `Z_0 = -h/2 < Z_1 < ... < Z_N = h/2`.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::elements::{PlySpec, PrincipalAxisLamina, RotatedLamina};
use crate::error::{CLTError, CLTResult};
use crate::math::{self, Mat3, Mat6};

/// Relative tolerance on B (scaled by max|A| * h) below which a laminate is
/// treated as free of bending-extension coupling
pub const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// Homogenized in-plane engineering constants of a laminate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApparentModuli {
    #[serde(rename = "hat_E_x")]
    pub hat_e_x: f64,
    #[serde(rename = "hat_E_y")]
    pub hat_e_y: f64,
    pub hat_nu_xy: f64,
    pub hat_nu_yx: f64,
    #[serde(rename = "hat_G_xy")]
    pub hat_g_xy: f64,
}

impl ApparentModuli {
    /// Compliance assembled from the homogenized constants
    pub fn compliance(&self) -> Mat3 {
        Mat3::new(
            1.0 / self.hat_e_x,               -self.hat_nu_yx / self.hat_e_y, 0.0,
            -self.hat_nu_xy / self.hat_e_x,   1.0 / self.hat_e_y,             0.0,
            0.0,                              0.0,                            1.0 / self.hat_g_xy,
        )
    }
}

/// A laminate built from an ordered stack of plies
#[derive(Debug, Clone)]
pub struct LaminateAssembly {
    specs: Vec<PlySpec>,
    plies: Vec<RotatedLamina>,
    thicknesses: Vec<f64>,
    total_thickness: f64,
    /// Z_0..Z_N
    interfaces: Vec<f64>,
    a: Mat3,
    b: Mat3,
    c: Mat3,
    moduli: ApparentModuli,
    apparent_compliance: Mat3,
}

impl LaminateAssembly {
    /// Assemble a laminate from its plies, bottom ply first
    pub fn new(specs: &[PlySpec]) -> CLTResult<Self> {
        if specs.is_empty() {
            return Err(CLTError::EmptyLaminate);
        }

        let plies = specs
            .iter()
            .map(|spec| {
                let principal =
                    PrincipalAxisLamina::new(spec.e_l(), spec.e_t(), spec.g_lt(), spec.nu_lt())?;
                RotatedLamina::new(principal, spec.theta_radians())
            })
            .collect::<CLTResult<Vec<_>>>()?;

        let thicknesses: Vec<f64> = specs.iter().map(PlySpec::thickness).collect();
        let total_thickness: f64 = thicknesses.iter().sum();
        let interfaces = interface_coordinates(&thicknesses, total_thickness);

        let mut a = Mat3::zeros();
        let mut b = Mat3::zeros();
        let mut c = Mat3::zeros();

        for (k, ply) in plies.iter().enumerate() {
            let z0 = interfaces[k];
            let z1 = interfaces[k + 1];
            let k_xy = ply.stiffness_xy;

            a += k_xy * thicknesses[k];
            b += k_xy * ((z1.powi(2) - z0.powi(2)) / 2.0);
            c += k_xy * ((z1.powi(3) - z0.powi(3)) / 3.0);

            debug!(
                "ply {}: theta = {} deg, z = [{:e}, {:e}]",
                k + 1,
                ply.theta_degrees(),
                z0,
                z1
            );
        }

        let moduli = apparent_moduli(&a, total_thickness)?;
        let apparent_compliance = moduli.compliance();

        debug!(
            "apparent moduli: E_x = {:e}, E_y = {:e}, G_xy = {:e}, nu_xy = {}",
            moduli.hat_e_x, moduli.hat_e_y, moduli.hat_g_xy, moduli.hat_nu_xy
        );

        let laminate = Self {
            specs: specs.to_vec(),
            plies,
            thicknesses,
            total_thickness,
            interfaces,
            a,
            b,
            c,
            moduli,
            apparent_compliance,
        };

        if laminate.has_coupling() {
            info!(
                "laminate of {} plies has bending-extension coupling",
                laminate.ply_count()
            );
        }

        Ok(laminate)
    }

    // ========================
    // Accessors
    // ========================

    pub fn ply_count(&self) -> usize {
        self.plies.len()
    }

    /// Input records in stacking order
    pub fn specs(&self) -> &[PlySpec] {
        &self.specs
    }

    /// Rotated plies in stacking order
    pub fn plies(&self) -> &[RotatedLamina] {
        &self.plies
    }

    pub fn thicknesses(&self) -> &[f64] {
        &self.thicknesses
    }

    pub fn total_thickness(&self) -> f64 {
        self.total_thickness
    }

    /// Interface coordinates Z_0..Z_N
    pub fn interfaces(&self) -> &[f64] {
        &self.interfaces
    }

    /// Z_k for 0 <= k <= N
    pub fn z_k(&self, k: usize) -> Option<f64> {
        self.interfaces.get(k).copied()
    }

    /// Extensional stiffness
    pub fn a(&self) -> &Mat3 {
        &self.a
    }

    /// Bending-extension coupling stiffness
    pub fn b(&self) -> &Mat3 {
        &self.b
    }

    /// Bending stiffness (third moment of thickness)
    pub fn c(&self) -> &Mat3 {
        &self.c
    }

    /// Bending stiffness under its usual CLT name, D
    pub fn bending_stiffness(&self) -> &Mat3 {
        &self.c
    }

    /// 6x6 [[A, B], [B, D]] stiffness relating (N, M) to (eps0, kappa)
    pub fn abd_matrix(&self) -> Mat6 {
        math::block_matrix(&self.a, &self.b, &self.c)
    }

    pub fn apparent_moduli(&self) -> ApparentModuli {
        self.moduli
    }

    pub fn apparent_compliance(&self) -> &Mat3 {
        &self.apparent_compliance
    }

    /// Ply k and ply N+1-k identical for every k
    pub fn is_symmetric_layup(&self) -> bool {
        let n = self.specs.len();
        (0..n / 2).all(|k| self.specs[k] == self.specs[n - 1 - k])
    }

    /// True when B is non-zero beyond round-off
    pub fn has_coupling(&self) -> bool {
        let scale = self.a.amax() * self.total_thickness;
        self.b.amax() > SYMMETRY_TOLERANCE * scale
    }
}

fn interface_coordinates(thicknesses: &[f64], total_thickness: f64) -> Vec<f64> {
    let half = total_thickness / 2.0;
    std::iter::once(-half)
        .chain(thicknesses.iter().scan(0.0, |acc, t| {
            *acc += t;
            Some(*acc - half)
        }))
        .collect()
}

fn require_nonzero(quantity: &str, value: f64) -> CLTResult<f64> {
    if value == 0.0 || !value.is_finite() {
        return Err(CLTError::DegenerateStiffness(format!("{quantity} = {value}")));
    }
    Ok(value)
}

/// Plane-stress homogenization of the extensional stiffness
fn apparent_moduli(a: &Mat3, total_thickness: f64) -> CLTResult<ApparentModuli> {
    let a11 = require_nonzero("A(1,1)", a[(0, 0)])?;
    let a22 = require_nonzero("A(2,2)", a[(1, 1)])?;
    let a33 = require_nonzero("A(3,3)", a[(2, 2)])?;
    let a12 = a[(0, 1)];
    let a21 = a[(1, 0)];

    let det = require_nonzero("A(1,1)*A(2,2) - A(1,2)^2", a11 * a22 - a12 * a12)?;

    Ok(ApparentModuli {
        hat_e_x: det / (a22 * total_thickness),
        hat_e_y: det / (a11 * total_thickness),
        hat_nu_xy: a21 / a22,
        hat_nu_yx: a21 / a11,
        hat_g_xy: a33 / total_thickness,
    })
}
