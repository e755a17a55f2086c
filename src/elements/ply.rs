//! Ply specification - validated input record for one layer

use serde::{Deserialize, Serialize};

use crate::error::{check_finite, check_modulus, CLTError, CLTResult};

/// Material and geometry parameters of a single ply
///
/// Moduli are in the fiber-aligned (L, T) axes. The angle is in degrees,
/// measured from the laminate x-axis to the fiber direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PlyRecord")]
pub struct PlySpec {
    /// Longitudinal Young's modulus
    #[serde(rename = "E_l")]
    e_l: f64,
    /// Transverse Young's modulus
    #[serde(rename = "E_t")]
    e_t: f64,
    /// In-plane shear modulus
    #[serde(rename = "G_lt")]
    g_lt: f64,
    /// Major Poisson ratio
    nu_lt: f64,
    /// Fiber angle in degrees
    theta: f64,
    /// Ply thickness
    thickness: f64,
}

/// Unvalidated ply record as it arrives from an external source
#[derive(Debug, Clone, Deserialize)]
pub struct PlyRecord {
    #[serde(rename = "E_l")]
    pub e_l: f64,
    #[serde(rename = "E_t")]
    pub e_t: f64,
    #[serde(rename = "G_lt")]
    pub g_lt: f64,
    pub nu_lt: f64,
    #[serde(alias = "theta_degrees")]
    pub theta: f64,
    pub thickness: f64,
}

impl TryFrom<PlyRecord> for PlySpec {
    type Error = CLTError;

    fn try_from(r: PlyRecord) -> CLTResult<Self> {
        PlySpec::new(r.e_l, r.e_t, r.g_lt, r.nu_lt, r.theta, r.thickness)
    }
}

impl PlySpec {
    /// Create a validated ply
    ///
    /// Moduli and thickness must be strictly positive and every value finite.
    /// The Poisson ratio is not range-checked.
    pub fn new(
        e_l: f64,
        e_t: f64,
        g_lt: f64,
        nu_lt: f64,
        theta: f64,
        thickness: f64,
    ) -> CLTResult<Self> {
        check_modulus("E_l", e_l)?;
        check_modulus("E_t", e_t)?;
        check_modulus("G_lt", g_lt)?;
        check_finite("nu_lt", nu_lt)?;
        check_finite("theta", theta)?;
        check_finite("thickness", thickness)?;
        if thickness <= 0.0 {
            return Err(CLTError::NonPositiveThickness(thickness));
        }
        Ok(Self {
            e_l,
            e_t,
            g_lt,
            nu_lt,
            theta,
            thickness,
        })
    }

    /// Same material and thickness, different fiber angle
    pub fn with_theta(mut self, theta: f64) -> CLTResult<Self> {
        self.theta = check_finite("theta", theta)?;
        Ok(self)
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

    /// Fiber angle in degrees
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Fiber angle in radians
    pub fn theta_radians(&self) -> f64 {
        self.theta.to_radians()
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// True when two plies share material and thickness
    pub fn same_material(&self, other: &PlySpec) -> bool {
        self.e_l == other.e_l
            && self.e_t == other.e_t
            && self.g_lt == other.g_lt
            && self.nu_lt == other.nu_lt
            && self.thickness == other.thickness
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ply() {
        let ply = PlySpec::new(140e9, 5e9, 5e9, 0.35, 45.0, 0.25e-3).unwrap();
        assert_eq!(ply.e_l(), 140e9);
        assert!((ply.theta_radians() - std::f64::consts::FRAC_PI_4).abs() < 1e-15);
    }

    #[test]
    fn test_zero_modulus_rejected() {
        let err = PlySpec::new(0.0, 5e9, 5e9, 0.35, 0.0, 1.0).unwrap_err();
        assert!(err.is_domain());
        assert!(matches!(err, CLTError::NonPositiveModulus { name: "E_l", .. }));

        let err = PlySpec::new(140e9, 5e9, -1.0, 0.35, 0.0, 1.0).unwrap_err();
        assert!(matches!(err, CLTError::NonPositiveModulus { name: "G_lt", .. }));
    }

    #[test]
    fn test_thickness_rejected() {
        let err = PlySpec::new(140e9, 5e9, 5e9, 0.35, 0.0, 0.0).unwrap_err();
        assert!(matches!(err, CLTError::NonPositiveThickness(_)));
    }

    #[test]
    fn test_poisson_not_range_checked() {
        assert!(PlySpec::new(140e9, 5e9, 5e9, 1.5, 0.0, 1.0).is_ok());
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"{"E_l":140e9,"E_t":5e9,"G_lt":5e9,"nu_lt":0.35,"theta_degrees":90,"thickness":0.001}"#;
        let ply: PlySpec = serde_json::from_str(json).unwrap();
        assert_eq!(ply.theta(), 90.0);

        let json = r#"{"E_l":0,"E_t":5e9,"G_lt":5e9,"nu_lt":0.35,"theta":0,"thickness":0.001}"#;
        assert!(serde_json::from_str::<PlySpec>(json).is_err());
    }

    #[test]
    fn test_serialized_field_names() {
        let ply = PlySpec::new(140e9, 5e9, 5e9, 0.35, 0.0, 1.0).unwrap();
        let value = serde_json::to_value(ply).unwrap();
        for key in ["E_l", "E_t", "G_lt", "nu_lt", "theta", "thickness"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
    }
}
