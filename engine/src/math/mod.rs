//! 2D Math Helpers
//!
//! The engine uses [`glam::Vec2`] for all vector arithmetic. This module
//! adds the two things the simulation needs that `Vec2` does not name
//! directly: a rotation-by-angle type and a zero-guarded perpendicular
//! unit vector.
//!
//! Degenerate inputs never panic: normalizing a zero vector yields the
//! zero vector, matching `Vec2::normalize_or_zero`.

use glam::Vec2;

/// A 2D rotation about the origin, stored as the cosine and sine of the
/// angle (the two distinct entries of a 2x2 rotation matrix).
///
/// Built once per use from an absolute angle and applied to a vector.
/// The capsule recomputes its direction every tick by rotating its fixed
/// construction-time reference direction by the accumulated angle, so
/// rotations never compound numerically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rot2 {
    cos: f32,
    sin: f32,
}

impl Rot2 {
    /// Create a rotation by `angle` radians (counter-clockwise for the
    /// mathematical convention; screen-space interpretation is up to the
    /// host's axis orientation).
    pub fn new(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { cos, sin }
    }

    /// The identity rotation.
    pub fn identity() -> Self {
        Self { cos: 1.0, sin: 0.0 }
    }

    /// Rotate a vector about the origin.
    pub fn rotate(&self, v: Vec2) -> Vec2 {
        Vec2::new(
            self.cos * v.x - self.sin * v.y,
            self.sin * v.x + self.cos * v.y,
        )
    }
}

/// Unit vector perpendicular to `v` (90 degrees counter-clockwise).
///
/// Returns the zero vector when `v` is zero.
pub fn perp_unit(v: Vec2) -> Vec2 {
    v.perp().normalize_or_zero()
}
