//! Ply-level elements module

mod lamina;
mod ply;
mod rotated;

pub use lamina::PrincipalAxisLamina;
pub use ply::{PlyRecord, PlySpec};
pub use rotated::RotatedLamina;
