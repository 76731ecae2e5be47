//! Math utilities and types for the scene-graph core.
//!
//! This module provides the matrix and vector types the rest of the crate is
//! built on, plus helper functions for angle conversions. All types are
//! designed to be compatible with GPU memory layouts (e.g., for use with
//! WGPU/WGSL).
//!
//! # Angle convention
//!
//! Rotations throughout the crate are measured in *turns*: one turn is a full
//! revolution (360 degrees, 2π radians). Yaw, pitch, and roll are fractions of
//! a turn and are only converted to radians inside the rotation-matrix
//! constructors.

pub mod mat;
pub mod vec;

pub use mat::Mat4;
pub use vec::Vec4;

/// Converts an angle in turns to radians.
///
/// One turn equals 2π radians. No wrapping is applied; `turns_to_rad(1.5)`
/// returns one and a half revolutions' worth of radians.
pub fn turns_to_rad(turns: f32) -> f32 {
    turns * std::f32::consts::TAU
}

/// Converts an angle in radians to turns.
#[allow(dead_code)]
pub fn rad_to_turns(radians: f32) -> f32 {
    radians / std::f32::consts::TAU
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_conversions() {
        assert_eq!(turns_to_rad(0.5), std::f32::consts::PI);
        assert_eq!(rad_to_turns(std::f32::consts::PI), 0.5);
        assert_eq!(turns_to_rad(0.0), 0.0);
    }
}
