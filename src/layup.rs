//! Stacking-sequence builder
//!
//! Most laminates repeat one ply material at several fiber angles. A
//! `Layup` holds that template ply plus the angle sequence and expands it
//! into the `PlySpec` list consumed by `LaminateAssembly`.

use serde::{Deserialize, Serialize};

use crate::elements::PlySpec;
use crate::error::CLTResult;
use crate::laminate::LaminateAssembly;

/// One ply material stacked at a sequence of angles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layup {
    /// Material and thickness shared by every ply
    pub ply: PlySpec,
    /// Fiber angles in degrees, bottom ply first
    pub angles: Vec<f64>,
}

impl Layup {
    /// Create an empty layup for a ply material
    pub fn new(ply: PlySpec) -> Self {
        Self {
            ply,
            angles: Vec::new(),
        }
    }

    /// Set the angle sequence
    pub fn with_angles(mut self, angles: &[f64]) -> Self {
        self.angles = angles.to_vec();
        self
    }

    /// Append one ply at `theta` degrees
    pub fn push(mut self, theta: f64) -> Self {
        self.angles.push(theta);
        self
    }

    /// Mirror the current sequence about the mid-plane, e.g. [0/90] -> [0/90/90/0]
    pub fn symmetric(mut self) -> Self {
        let mirrored: Vec<f64> = self.angles.iter().rev().copied().collect();
        self.angles.extend(mirrored);
        self
    }

    /// Repeat the current sequence `times` times
    pub fn repeated(mut self, times: usize) -> Self {
        let base = std::mem::take(&mut self.angles);
        self.angles = base
            .iter()
            .copied()
            .cycle()
            .take(base.len() * times)
            .collect();
        self
    }

    pub fn len(&self) -> usize {
        self.angles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// Expand into validated plies
    pub fn build(&self) -> CLTResult<Vec<PlySpec>> {
        self.angles
            .iter()
            .map(|&theta| self.ply.with_theta(theta))
            .collect()
    }

    /// Expand and assemble the laminate
    pub fn assemble(&self) -> CLTResult<LaminateAssembly> {
        LaminateAssembly::new(&self.build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CLTError;

    fn template() -> PlySpec {
        PlySpec::new(140e9, 5e9, 5e9, 0.35, 0.0, 0.25e-3).unwrap()
    }

    #[test]
    fn test_symmetric_mirror() {
        let layup = Layup::new(template()).with_angles(&[0.0, 45.0, 90.0]).symmetric();
        assert_eq!(layup.angles, vec![0.0, 45.0, 90.0, 90.0, 45.0, 0.0]);
    }

    #[test]
    fn test_repeated() {
        let layup = Layup::new(template()).push(45.0).push(-45.0).repeated(3);
        assert_eq!(layup.len(), 6);
        assert_eq!(layup.angles[4], 45.0);
        assert_eq!(layup.angles[5], -45.0);
    }

    #[test]
    fn test_build_keeps_material() {
        let plies = Layup::new(template()).with_angles(&[30.0, -30.0]).build().unwrap();
        assert_eq!(plies.len(), 2);
        assert_eq!(plies[1].theta(), -30.0);
        assert!(plies[0].same_material(&plies[1]));
    }

    #[test]
    fn test_empty_layup_rejected() {
        let err = Layup::new(template()).assemble().unwrap_err();
        assert!(matches!(err, CLTError::EmptyLaminate));
    }

    #[test]
    fn test_symmetric_layup_detected() {
        let laminate = Layup::new(template())
            .with_angles(&[0.0, 45.0, -45.0, 90.0])
            .symmetric()
            .assemble()
            .unwrap();
        assert!(laminate.is_symmetric_layup());
        assert!(!laminate.has_coupling());
    }
}
