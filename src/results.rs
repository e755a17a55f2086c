//! Serializable result records
//!
//! Each record lists exactly the fields that are exported. Matrices are
//! written row-major as nested `[[f64; 3]; 3]` arrays.

use serde::{Deserialize, Serialize};

use crate::elements::{PlySpec, RotatedLamina};
use crate::error::CLTResult;
use crate::laminate::{ApparentModuli, LaminateAssembly};
use crate::math::to_rows;

pub type Rows3 = [[f64; 3]; 3];

/// Derived attributes of one ply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaminaReport {
    #[serde(rename = "E_l")]
    pub e_l: f64,
    #[serde(rename = "E_t")]
    pub e_t: f64,
    #[serde(rename = "G_lt")]
    pub g_lt: f64,
    pub nu_lt: f64,
    pub nu_tl: f64,
    pub theta_degrees: f64,
    pub theta: f64,
    pub cos_theta: f64,
    pub sin_theta: f64,
    #[serde(rename = "hat_E_l")]
    pub hat_e_l: f64,
    #[serde(rename = "hat_E_t")]
    pub hat_e_t: f64,
    #[serde(rename = "E_x")]
    pub e_x: f64,
    #[serde(rename = "E_y")]
    pub e_y: f64,
    #[serde(rename = "G_xy")]
    pub g_xy: f64,
    pub mu_yx: f64,
    pub eta_xy: f64,
    pub mu_xy: f64,
    pub compliance_lt: Rows3,
    pub compliance_xy: Rows3,
    #[serde(rename = "T")]
    pub transformation: Rows3,
    pub stiffness_lt: Rows3,
    pub stiffness_xy: Rows3,
}

impl LaminaReport {
    pub fn from_lamina(lamina: &RotatedLamina) -> Self {
        let p = &lamina.principal;
        Self {
            e_l: p.e_l(),
            e_t: p.e_t(),
            g_lt: p.g_lt(),
            nu_lt: p.nu_lt(),
            nu_tl: p.nu_tl(),
            theta_degrees: lamina.theta_degrees(),
            theta: lamina.theta,
            cos_theta: lamina.cos_theta,
            sin_theta: lamina.sin_theta,
            hat_e_l: lamina.hat_e_l,
            hat_e_t: lamina.hat_e_t,
            e_x: lamina.e_x,
            e_y: lamina.e_y,
            g_xy: lamina.g_xy,
            mu_yx: lamina.mu_yx,
            eta_xy: lamina.eta_xy,
            mu_xy: lamina.mu_xy,
            compliance_lt: to_rows(p.compliance()),
            compliance_xy: to_rows(&lamina.compliance),
            transformation: to_rows(&lamina.transformation),
            stiffness_lt: to_rows(&lamina.stiffness_lt),
            stiffness_xy: to_rows(&lamina.stiffness_xy),
        }
    }
}

/// Full laminate result, the record handed to presentation layers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaminateReport {
    pub ply_count: usize,
    pub plies: Vec<PlySpec>,
    pub thickness_list: Vec<f64>,
    pub total_thickness: f64,
    /// Z_0..Z_N
    pub interfaces: Vec<f64>,
    #[serde(rename = "A")]
    pub a: Rows3,
    #[serde(rename = "B")]
    pub b: Rows3,
    #[serde(rename = "C")]
    pub c: Rows3,
    pub apparent_moduli: ApparentModuli,
    pub modules_apparents_matrix: Rows3,
    pub symmetric_layup: bool,
    pub coupled: bool,
    pub layers: Vec<LaminaReport>,
}

impl LaminateReport {
    pub fn from_laminate(laminate: &LaminateAssembly) -> Self {
        Self {
            ply_count: laminate.ply_count(),
            plies: laminate.specs().to_vec(),
            thickness_list: laminate.thicknesses().to_vec(),
            total_thickness: laminate.total_thickness(),
            interfaces: laminate.interfaces().to_vec(),
            a: to_rows(laminate.a()),
            b: to_rows(laminate.b()),
            c: to_rows(laminate.c()),
            apparent_moduli: laminate.apparent_moduli(),
            modules_apparents_matrix: to_rows(laminate.apparent_compliance()),
            symmetric_layup: laminate.is_symmetric_layup(),
            coupled: laminate.has_coupling(),
            layers: laminate.plies().iter().map(LaminaReport::from_lamina).collect(),
        }
    }

    pub fn to_json(&self) -> CLTResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> CLTResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl LaminateAssembly {
    /// Export the laminate and every ply as a serializable record
    pub fn to_report(&self) -> LaminateReport {
        LaminateReport::from_laminate(self)
    }
}

impl RotatedLamina {
    pub fn to_report(&self) -> LaminaReport {
        LaminaReport::from_lamina(self)
    }
}
