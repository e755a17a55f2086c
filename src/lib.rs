//! CLT Solver - Classical Lamination Theory for composite laminates
//!
//! This library computes the mechanical behaviour of a multi-layer
//! fiber-reinforced plate from the properties of its plies:
//! - Fiber-axis compliance of each orthotropic ply
//! - Off-axis engineering constants and rotated stiffness
//! - Extensional (A), coupling (B) and bending (C) stiffness matrices
//! - Apparent (homogenized) in-plane moduli of the laminate
//!
//! ## Example
//! ```rust
//! use clt_solver::prelude::*;
//!
//! // Carbon/epoxy ply, 0.25 mm thick
//! let ply = PlySpec::new(140e9, 5e9, 5e9, 0.35, 0.0, 0.25e-3).unwrap();
//!
//! // Cross-ply [0/90]s
//! let laminate = Layup::new(ply)
//!     .with_angles(&[0.0, 90.0])
//!     .symmetric()
//!     .assemble()
//!     .unwrap();
//!
//! let moduli = laminate.apparent_moduli();
//! assert!(moduli.hat_e_x > 5e9 && moduli.hat_e_x < 140e9);
//! assert!(!laminate.has_coupling());
//! ```

pub mod config;
pub mod elements;
pub mod error;
pub mod input;
pub mod laminate;
pub mod layup;
pub mod math;
pub mod results;

// Re-export common types
pub mod prelude {
    pub use crate::config::ServerConfig;
    pub use crate::elements::{PlySpec, PrincipalAxisLamina, RotatedLamina};
    pub use crate::error::{CLTError, CLTResult, ErrorKind};
    pub use crate::laminate::{ApparentModuli, LaminateAssembly};
    pub use crate::layup::Layup;
    pub use crate::results::{LaminaReport, LaminateReport};
}

#[cfg(feature = "wasm")]
pub mod wasm;
